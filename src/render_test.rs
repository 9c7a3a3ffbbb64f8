use super::*;

fn report(title: &str, description: Option<&str>) -> Report {
    Report {
        title: title.to_owned(),
        upload_date: "2025-03-05T10:20:30.123000".to_owned(),
        report_type: "Blood Test".to_owned(),
        description: description.map(str::to_owned),
    }
}

fn card_count(html: &str) -> usize {
    html.matches(&format!(r#"class="{REPORT_CARD_CLASS} "#)).count()
}

#[test]
fn card_shows_title_date_type_and_description() {
    let html = report_card(&report("CBC", Some("Routine checkup")));
    assert!(html.contains(">CBC</h4>"));
    assert!(html.contains(">3/5/2025</span>"));
    assert!(html.contains(">Blood Test</p>"));
    assert!(html.contains(">Routine checkup</p>"));
    assert_eq!(card_count(&html), 1);
    assert!(html.ends_with("</div>"));
}

#[test]
fn card_omits_missing_or_empty_description() {
    let missing = report_card(&report("CBC", None));
    let empty = report_card(&report("CBC", Some("")));
    assert!(!missing.contains("text-gray-600"));
    assert!(!empty.contains("text-gray-600"));
    assert_eq!(missing, empty);
}

#[test]
fn card_interpolates_fields_verbatim() {
    let html = report_card(&report("<b>MRI</b>", None));
    assert!(html.contains("<b>MRI</b>"));
}

#[test]
fn empty_list_shows_placeholder() {
    assert_eq!(report_list(&[]), REPORTS_EMPTY);
}

#[test]
fn list_renders_one_card_per_report_in_order() {
    let reports = [report("first", None), report("second", Some("x")), report("third", None)];
    let html = report_list(&reports);
    assert_eq!(card_count(&html), 3);
    let first = html.find(">first<").unwrap();
    let second = html.find(">second<").unwrap();
    let third = html.find(">third<").unwrap();
    assert!(first < second && second < third);
    assert!(!html.contains(REPORTS_EMPTY));
}
