use chrono::{NaiveDate, TimeZone, Utc};

use super::appointments::{self, AppointmentStatus, BookingRequest};
use super::*;

// =============================================================================
// matches_query
// =============================================================================

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query("", ["anything"]));
    assert!(matches_query("   ", ["anything"]));
}

#[test]
fn query_is_case_insensitive_substring() {
    assert!(matches_query("SMITH", ["Dr. Jane Smith"]));
    assert!(matches_query("  jane ", ["x", "Dr. Jane Smith"]));
    assert!(!matches_query("chen", ["Dr. Jane Smith", "Cardiologist"]));
}

// =============================================================================
// Search filters
// =============================================================================

#[test]
fn patient_search_covers_name_condition_and_id() {
    assert_eq!(patients::search("emily").len(), 1);
    assert_eq!(patients::search("asthma")[0].name, "Sarah Williams");
    assert_eq!(patients::search("p00").len(), patients::PATIENTS.len());
    assert!(patients::search("zzz").is_empty());
}

#[test]
fn recent_patients_use_fourteen_day_window() {
    let today = NaiveDate::from_ymd_opt(2023, 6, 20).unwrap();
    let ids: Vec<_> = patients::recent(today).iter().map(|p| p.id).collect();
    assert_eq!(ids, ["P001", "P002"]);
}

#[test]
fn recent_patients_empty_long_after_fixtures() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert!(patients::recent(today).is_empty());
}

#[test]
fn drug_search_matches_indications() {
    let hits = drugs::search("hypertension");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Lisinopril");
    assert_eq!(drugs::search("statin")[0].name, "Atorvastatin");
}

#[test]
fn saved_drugs_are_flagged_entries() {
    let names: Vec<_> = drugs::saved().iter().map(|d| d.name).collect();
    assert_eq!(names, ["Lisinopril", "Atorvastatin"]);
}

#[test]
fn record_search_covers_title_doctor_hospital() {
    assert_eq!(records::search("metro").len(), 2);
    assert_eq!(records::search("blood")[0].title, "Blood Work Analysis");
    assert_eq!(records::search("jane smith").len(), 2);
}

#[test]
fn contact_search_covers_specialty() {
    assert_eq!(contacts::search("neuro")[0].name, "Dr. Sarah Johnson");
    assert_eq!(contacts::search("").len(), contacts::CONTACTS.len());
}

#[test]
fn contact_find_by_id() {
    assert_eq!(contacts::find("2").map(|c| c.name), Some("Dr. Michael Chen"));
    assert_eq!(contacts::find("9"), None);
}

// =============================================================================
// Appointments
// =============================================================================

#[test]
fn appointments_partition_by_status() {
    let total: usize = AppointmentStatus::ALL
        .iter()
        .map(|s| appointments::with_status(*s).len())
        .sum();
    assert_eq!(total, appointments::APPOINTMENTS.len());
    assert_eq!(appointments::with_status(AppointmentStatus::Upcoming).len(), 2);
}

#[test]
fn booking_requires_every_field() {
    let full = BookingRequest {
        doctor: "Dr. Jane Smith".into(),
        date: "2025-06-15".into(),
        time: "10:00 AM".into(),
    };
    for field in 0..3 {
        let mut req = full.clone();
        match field {
            0 => req.doctor.clear(),
            1 => req.date.clear(),
            _ => req.time = " ".into(),
        }
        assert!(appointments::confirm_booking(&req).is_err(), "field {field}");
    }
}

#[test]
fn booking_confirmation_formats_date() {
    let req = BookingRequest {
        doctor: "Dr. Jane Smith".into(),
        date: "2025-06-15".into(),
        time: "10:00 AM".into(),
    };
    assert_eq!(
        appointments::confirm_booking(&req).unwrap(),
        "Your appointment with Dr. Jane Smith on June 15, 2025 at 10:00 AM has been scheduled."
    );
}

#[test]
fn booking_rejects_unparseable_date() {
    let req = BookingRequest {
        doctor: "Dr. Jane Smith".into(),
        date: "tomorrow".into(),
        time: "10:00 AM".into(),
    };
    assert!(appointments::confirm_booking(&req).is_err());
}

// =============================================================================
// Chat thread
// =============================================================================

#[test]
fn seeded_thread_is_chronological() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let thread = contacts::ChatThread::seeded(now);
    assert_eq!(thread.messages.len(), 5);
    assert!(thread.messages.windows(2).all(|w| w[0].sent_at < w[1].sent_at));
    assert_eq!(thread.messages[0].id, 1);
}

#[test]
fn send_appends_trimmed_message() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut thread = contacts::ChatThread::seeded(now);
    assert!(thread.send("  thanks doctor  ", now));
    let last = thread.messages.last().unwrap();
    assert_eq!(last.body, "thanks doctor");
    assert_eq!(last.sender, contacts::Sender::Me);
    assert_eq!(last.id, 6);
}

#[test]
fn send_ignores_blank_input() {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut thread = contacts::ChatThread::default();
    assert!(!thread.send("   ", now));
    assert!(thread.messages.is_empty());
}

// =============================================================================
// Notification inbox
// =============================================================================

#[test]
fn seeded_inbox_has_two_unread() {
    let inbox = notifications::Inbox::seeded();
    assert_eq!(inbox.items.len(), 5);
    assert_eq!(inbox.unread_count(), 2);
    let ids: Vec<_> = inbox.unread().iter().map(|n| n.id).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn mark_read_flips_only_unread_entries() {
    let mut inbox = notifications::Inbox::seeded();
    assert!(inbox.mark_read("1"));
    assert!(!inbox.mark_read("1"));
    assert!(!inbox.mark_read("3"));
    assert!(!inbox.mark_read("missing"));
    assert_eq!(inbox.unread_count(), 1);
}

#[test]
fn mark_all_read_reports_changed_count() {
    let mut inbox = notifications::Inbox::seeded();
    assert_eq!(inbox.mark_all_read(), 2);
    assert_eq!(inbox.unread_count(), 0);
    assert_eq!(inbox.mark_all_read(), 0);
    assert!(inbox.items.iter().all(|n| n.read));
}

#[test]
fn remove_deletes_by_id() {
    let mut inbox = notifications::Inbox::seeded();
    assert!(inbox.remove("2"));
    assert!(!inbox.remove("2"));
    assert_eq!(inbox.items.len(), 4);
    assert_eq!(inbox.unread_count(), 1);
}
