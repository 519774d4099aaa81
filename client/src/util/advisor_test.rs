use super::*;

#[test]
fn symptom_checker_matches_headache_case_insensitively() {
    let reply = AdvisorKind::SymptomChecker.reply("I have a HEADACHE since morning");
    assert!(reply.starts_with("Headaches can be caused"));
}

#[test]
fn symptom_checker_matches_fever() {
    assert!(AdvisorKind::SymptomChecker.reply("slight fever").starts_with("Fever is often"));
}

#[test]
fn symptom_checker_first_rule_wins() {
    let reply = AdvisorKind::SymptomChecker.reply("fever and headache");
    assert!(reply.starts_with("Headaches"));
}

#[test]
fn symptom_checker_falls_back() {
    assert_eq!(AdvisorKind::SymptomChecker.reply("my knee hurts"), SYMPTOM_FALLBACK);
}

#[test]
fn medicine_advisor_has_its_own_rules() {
    assert!(AdvisorKind::MedicineAdvisor.reply("Hypertension stage 1").starts_with("Hypertension is"));
    assert!(AdvisorKind::MedicineAdvisor.reply("headache").starts_with("Common over-the-counter"));
    assert_eq!(AdvisorKind::MedicineAdvisor.reply("fever"), MEDICINE_FALLBACK);
}

#[test]
fn greetings_differ_by_kind() {
    assert_ne!(AdvisorKind::SymptomChecker.greeting(), AdvisorKind::MedicineAdvisor.greeting());
}
