use super::*;

fn calendar(raw: &str) -> Option<NaiveDate> {
    Timestamp::parse(raw).map(Timestamp::utc_date)
}

#[test]
fn parses_naive_timestamp_with_fraction() {
    assert_eq!(
        calendar("2025-03-05T10:20:30.123000"),
        NaiveDate::from_ymd_opt(2025, 3, 5)
    );
}

#[test]
fn naive_timestamp_keeps_its_written_date() {
    assert!(matches!(
        Timestamp::parse("2024-12-31T23:59:59"),
        Some(Timestamp::Calendar(_))
    ));
    assert_eq!(calendar("2024-12-31T23:59:59"), NaiveDate::from_ymd_opt(2024, 12, 31));
}

#[test]
fn offset_timestamp_is_an_instant() {
    let Some(Timestamp::Instant(dt)) = Timestamp::parse("2025-01-01T01:30:00+05:30") else {
        panic!("expected an instant");
    };
    assert_eq!(dt.timestamp(), 1_735_675_200);
}

#[test]
fn offset_timestamp_crosses_midnight_into_utc() {
    assert_eq!(
        calendar("2025-01-01T01:30:00+05:30"),
        NaiveDate::from_ymd_opt(2024, 12, 31)
    );
    assert_eq!(
        calendar("2025-06-10T08:00:00Z"),
        NaiveDate::from_ymd_opt(2025, 6, 10)
    );
    assert_eq!(format_short_date("2025-01-01T01:30:00+05:30"), "12/31/2024");
}

#[test]
fn parses_bare_date() {
    assert_eq!(calendar(" 2023-07-04 "), NaiveDate::from_ymd_opt(2023, 7, 4));
}

#[test]
fn rejects_garbage() {
    assert_eq!(Timestamp::parse("last tuesday"), None);
    assert_eq!(Timestamp::parse(""), None);
}

#[test]
fn short_date_uses_month_day_year_without_padding() {
    assert_eq!(format_short_date("2025-03-05T10:20:30"), "3/5/2025");
    assert_eq!(format_short_date("2024-11-23"), "11/23/2024");
}

#[test]
fn unparseable_date_is_shown_verbatim() {
    assert_eq!(format_short_date("soon"), "soon");
}
