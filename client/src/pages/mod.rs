//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. Access control happens before a page mounts, in
//! `components::protected_route`.

pub mod appointments;
pub mod book_appointment;
pub mod chat;
pub mod dashboard_redirect;
pub mod doctor_dashboard;
pub mod home;
pub mod login;
pub mod medical_records;
pub mod medicine_advisor;
pub mod not_found;
pub mod patient_dashboard;
pub mod patient_records;
pub mod signup;
pub mod symptom_checker;
