use super::*;

fn report(title: &str) -> Report {
    Report {
        title: title.to_owned(),
        upload_date: "2025-01-15".to_owned(),
        report_type: "X-Ray".to_owned(),
        description: None,
    }
}

#[test]
fn loading_placeholder_comes_first() {
    assert_eq!(ReportsView::Loading.markup(), render::REPORTS_LOADING);
}

#[test]
fn empty_listing_shows_no_reports_message() {
    let view = ReportsView::from_result(Ok(Vec::new()));
    assert_eq!(view.markup(), render::REPORTS_EMPTY);
}

#[test]
fn listing_renders_every_report() {
    let view = ReportsView::from_result(Ok(vec![report("a"), report("b")]));
    let html = view.markup();
    assert_eq!(html, format!("{}{}", render::report_card(&report("a")), render::report_card(&report("b"))));
}

#[test]
fn status_failure_differs_from_network_failure() {
    let failed = ReportsView::from_result(Err(ApiError::Status(500)));
    let unreachable = ReportsView::from_result(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(failed, ReportsView::Failed);
    assert_eq!(unreachable, ReportsView::Unreachable);
    assert_eq!(failed.markup(), render::REPORTS_FAILED);
    assert_eq!(unreachable.markup(), render::REPORTS_UNREACHABLE);
}

#[test]
fn undecodable_body_is_treated_as_unreachable() {
    let view = ReportsView::from_result(Err(ApiError::Decode("expected array".to_owned())));
    assert_eq!(view, ReportsView::Unreachable);
}
