//! Keyword-matched canned replies for the symptom checker and medicine
//! advisor chat cards. There is no model behind this; matching is a
//! case-insensitive substring test, first rule wins.

#[cfg(test)]
#[path = "advisor_test.rs"]
mod advisor_test;

/// Which assistant persona is answering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvisorKind {
    SymptomChecker,
    MedicineAdvisor,
}

struct Rule {
    keyword: &'static str,
    reply: &'static str,
}

const SYMPTOM_RULES: &[Rule] = &[
    Rule {
        keyword: "headache",
        reply: "Headaches can be caused by stress, dehydration, eye strain, or more serious conditions. \
                If they are severe or persistent, consider consulting a doctor. Meanwhile rest, stay \
                hydrated, and take over-the-counter pain relief if appropriate.",
    },
    Rule {
        keyword: "fever",
        reply: "Fever is often a sign that your body is fighting an infection. Rest, stay hydrated, and \
                take fever-reducing medication if necessary. Seek medical attention if it is above \
                103\u{b0}F/39.4\u{b0}C, lasts more than 3 days, or comes with severe symptoms.",
    },
];

const SYMPTOM_FALLBACK: &str = "Based on the symptoms you've described, I recommend consulting a \
                                healthcare professional for an accurate diagnosis. Would you like \
                                help scheduling an appointment with a doctor?";

const MEDICINE_RULES: &[Rule] = &[
    Rule {
        keyword: "headache",
        reply: "Common over-the-counter options for headaches include acetaminophen or NSAIDs such as \
                ibuprofen or naproxen. Follow dosage instructions and consult a provider if headaches \
                persist.",
    },
    Rule {
        keyword: "hypertension",
        reply: "Hypertension is typically treated with ACE inhibitors, ARBs, calcium channel blockers, or \
                diuretics. The choice depends on the patient's overall health and needs a prescription \
                with regular monitoring.",
    },
];

const MEDICINE_FALLBACK: &str = "I need more specific information to suggest medication for this \
                                 condition. Please consult a healthcare provider for personalized \
                                 advice and prescriptions.";

impl AdvisorKind {
    /// Opening message shown before the user types anything.
    #[must_use]
    pub fn greeting(self) -> &'static str {
        match self {
            Self::SymptomChecker => {
                "Hello! I'm your virtual health assistant. Describe your symptoms and I'll help you \
                 understand what might be causing them."
            }
            Self::MedicineAdvisor => {
                "Hello! I'm your medicine advisor. Describe the condition or diagnosis, and I'll \
                 suggest possible medications."
            }
        }
    }

    /// Canned answer for `input`.
    #[must_use]
    pub fn reply(self, input: &str) -> &'static str {
        let (rules, fallback) = match self {
            Self::SymptomChecker => (SYMPTOM_RULES, SYMPTOM_FALLBACK),
            Self::MedicineAdvisor => (MEDICINE_RULES, MEDICINE_FALLBACK),
        };
        let lowered = input.to_lowercase();
        rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
            .map_or(fallback, |rule| rule.reply)
    }
}
