//! Patient roster shown to doctors.

use chrono::NaiveDate;

use super::matches_query;

/// Window for the "recent visits" tab.
pub const RECENT_VISIT_DAYS: i64 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patient {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub gender: &'static str,
    pub condition: &'static str,
    pub last_visit: &'static str,
}

pub const PATIENTS: &[Patient] = &[
    Patient { id: "P001", name: "Emily Johnson", age: 42, gender: "Female", condition: "Hypertension", last_visit: "2023-06-15" },
    Patient { id: "P002", name: "David Chen", age: 35, gender: "Male", condition: "Type 2 Diabetes", last_visit: "2023-06-10" },
    Patient { id: "P003", name: "Sarah Williams", age: 28, gender: "Female", condition: "Asthma", last_visit: "2023-06-05" },
    Patient { id: "P004", name: "Michael Brown", age: 55, gender: "Male", condition: "Arthritis", last_visit: "2023-05-28" },
    Patient { id: "P005", name: "Jessica Taylor", age: 31, gender: "Female", condition: "Anxiety", last_visit: "2023-05-20" },
    Patient { id: "P006", name: "Robert Martinez", age: 67, gender: "Male", condition: "COPD", last_visit: "2023-05-15" },
    Patient { id: "P007", name: "Linda Anderson", age: 49, gender: "Female", condition: "Migraine", last_visit: "2023-05-10" },
];

impl Patient {
    #[must_use]
    pub fn last_visit_date(&self) -> Option<NaiveDate> {
        crate::util::time::parse_iso_date(self.last_visit)
    }
}

/// Patients whose name, condition, or id contains `query`.
#[must_use]
pub fn search(query: &str) -> Vec<Patient> {
    PATIENTS
        .iter()
        .copied()
        .filter(|p| matches_query(query, [p.name, p.condition, p.id]))
        .collect()
}

/// Patients seen within the last `RECENT_VISIT_DAYS` days of `today`.
#[must_use]
pub fn recent(today: NaiveDate) -> Vec<Patient> {
    PATIENTS
        .iter()
        .copied()
        .filter(|p| {
            p.last_visit_date()
                .is_some_and(|d| d <= today && (today - d).num_days() < RECENT_VISIT_DAYS)
        })
        .collect()
}
