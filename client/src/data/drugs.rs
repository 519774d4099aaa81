//! Drug reference entries for the medicine advisor.

use super::matches_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrugInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub used_for: &'static [&'static str],
    pub side_effects: &'static [&'static str],
    pub dosage: &'static str,
    pub interactions: &'static [&'static str],
    pub saved: bool,
}

pub const DRUGS: &[DrugInfo] = &[
    DrugInfo {
        id: "d1",
        name: "Amoxicillin",
        category: "Antibiotic",
        used_for: &["Bacterial infections", "Pneumonia", "Bronchitis", "Ear infections"],
        side_effects: &["Diarrhea", "Rash", "Nausea", "Vomiting"],
        dosage: "250-500mg three times daily",
        interactions: &["Probenecid", "Allopurinol", "Oral contraceptives"],
        saved: false,
    },
    DrugInfo {
        id: "d2",
        name: "Lisinopril",
        category: "ACE Inhibitor",
        used_for: &["Hypertension", "Heart failure", "Post-myocardial infarction"],
        side_effects: &["Cough", "Dizziness", "Headache", "Fatigue"],
        dosage: "10-40mg once daily",
        interactions: &["NSAIDs", "Potassium supplements", "Lithium"],
        saved: true,
    },
    DrugInfo {
        id: "d3",
        name: "Metformin",
        category: "Antidiabetic",
        used_for: &["Type 2 diabetes", "Insulin resistance", "Polycystic ovary syndrome"],
        side_effects: &["Nausea", "Diarrhea", "Abdominal pain", "Lactic acidosis (rare)"],
        dosage: "500-1000mg twice daily",
        interactions: &["Certain contrast agents", "Alcohol", "Other diabetes medications"],
        saved: false,
    },
    DrugInfo {
        id: "d4",
        name: "Atorvastatin",
        category: "Statin",
        used_for: &["Hypercholesterolemia", "Cardiovascular disease prevention"],
        side_effects: &["Muscle pain", "Liver damage (rare)", "Headache", "Insomnia"],
        dosage: "10-80mg once daily",
        interactions: &["Grapefruit juice", "Certain antibiotics", "Cyclosporine"],
        saved: true,
    },
    DrugInfo {
        id: "d5",
        name: "Levothyroxine",
        category: "Thyroid Hormone",
        used_for: &["Hypothyroidism", "Thyroid hormone replacement"],
        side_effects: &["Weight loss", "Insomnia", "Anxiety", "Heart palpitations"],
        dosage: "25-200mcg once daily",
        interactions: &["Antacids", "Iron supplements", "Calcium supplements"],
        saved: false,
    },
];

/// Drugs matching `query` by name, category, or any indication.
#[must_use]
pub fn search(query: &str) -> Vec<DrugInfo> {
    DRUGS
        .iter()
        .copied()
        .filter(|d| matches_query(query, [d.name, d.category].into_iter().chain(d.used_for.iter().copied())))
        .collect()
}

#[must_use]
pub fn saved() -> Vec<DrugInfo> {
    DRUGS.iter().copied().filter(|d| d.saved).collect()
}
