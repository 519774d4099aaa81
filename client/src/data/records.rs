//! Medical record fixtures for the patient's records view.

use super::matches_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Prescription,
    LabReport,
    MedicalCertificate,
    DischargeSummary,
}

impl RecordKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Prescription => "Prescription",
            Self::LabReport => "Lab Report",
            Self::MedicalCertificate => "Medical Certificate",
            Self::DischargeSummary => "Discharge Summary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MedicalRecord {
    pub title: &'static str,
    pub kind: RecordKind,
    pub date: &'static str,
    pub doctor: &'static str,
    pub hospital: &'static str,
}

pub const RECORDS: &[MedicalRecord] = &[
    MedicalRecord {
        title: "Annual Physical Examination",
        kind: RecordKind::LabReport,
        date: "May 15, 2023",
        doctor: "Dr. Jane Smith",
        hospital: "Metro General Hospital",
    },
    MedicalRecord {
        title: "Hypertension Medication",
        kind: RecordKind::Prescription,
        date: "April 30, 2023",
        doctor: "Dr. Robert Williams",
        hospital: "City Medical Center",
    },
    MedicalRecord {
        title: "Sick Leave Certificate",
        kind: RecordKind::MedicalCertificate,
        date: "March 22, 2023",
        doctor: "Dr. Michael Chen",
        hospital: "Health First Clinic",
    },
    MedicalRecord {
        title: "Surgery Follow-up",
        kind: RecordKind::DischargeSummary,
        date: "February 10, 2023",
        doctor: "Dr. Sarah Johnson",
        hospital: "Metro General Hospital",
    },
    MedicalRecord {
        title: "Blood Work Analysis",
        kind: RecordKind::LabReport,
        date: "January 25, 2023",
        doctor: "Dr. Jane Smith",
        hospital: "City Medical Center",
    },
];

/// Records whose title, doctor, or hospital contains `query`.
#[must_use]
pub fn search(query: &str) -> Vec<MedicalRecord> {
    RECORDS
        .iter()
        .copied()
        .filter(|r| matches_query(query, [r.title, r.doctor, r.hospital]))
        .collect()
}
