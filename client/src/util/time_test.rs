use chrono::{Duration, TimeZone};

use super::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn parse_iso_date_accepts_input_value() {
    assert_eq!(parse_iso_date("2025-06-15"), NaiveDate::from_ymd_opt(2025, 6, 15));
    assert_eq!(parse_iso_date(" 2025-06-15 "), NaiveDate::from_ymd_opt(2025, 6, 15));
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("15/06/2025"), None);
    assert_eq!(parse_iso_date("2025-02-30"), None);
}

#[test]
fn long_date_spells_month() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
    assert_eq!(long_date(date), "June 05, 2025");
}

#[test]
fn relative_label_buckets() {
    let now = base();
    assert_eq!(relative_label(now, now), "just now");
    assert_eq!(relative_label(now, now + Duration::minutes(3)), "just now");
    assert_eq!(relative_label(now, now - Duration::minutes(1)), "1 minute ago");
    assert_eq!(relative_label(now, now - Duration::minutes(5)), "5 minutes ago");
    assert_eq!(relative_label(now, now - Duration::minutes(90)), "1 hour ago");
    assert_eq!(relative_label(now, now - Duration::hours(2)), "2 hours ago");
    assert_eq!(relative_label(now, now - Duration::hours(30)), "1 day ago");
    assert_eq!(relative_label(now, now - Duration::days(2)), "2 days ago");
}
