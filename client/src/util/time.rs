//! Date formatting helpers for cards and chat threads.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, NaiveDate, Utc};

/// Parse an `<input type="date">` value (`YYYY-MM-DD`).
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// `June 15, 2025`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Coarse "how long ago" label. Future instants read as "just now".
#[must_use]
pub fn relative_label(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    match minutes {
        i64::MIN..=0 => "just now".to_owned(),
        1 => "1 minute ago".to_owned(),
        2..=59 => format!("{minutes} minutes ago"),
        60..=119 => "1 hour ago".to_owned(),
        120..=1439 => format!("{} hours ago", minutes / 60),
        1440..=2879 => "1 day ago".to_owned(),
        _ => format!("{} days ago", minutes / 1440),
    }
}

/// Current UTC time. Reads the JS clock in the browser.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
