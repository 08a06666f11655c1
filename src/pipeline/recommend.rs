//! Content-triggered follow-up recommendations.
//!
//! A fixed table maps medical-topic trigger keywords to suggested
//! follow-up tests. Topics fire independently and can co-fire: one
//! document can legitimately concern several body systems, so this is a
//! union over topic buckets, not a mutually exclusive classification.
//! The table is data: tests can enumerate and extend it without touching
//! control flow.

/// A keyword-triggered topic bucket. Any trigger being a substring of the
/// lowercased text appends the whole recommendation list.
pub struct Topic {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Topic table, in output order. Russian trigger stems cover their
/// inflected forms via substring matching.
pub static TOPICS: &[Topic] = &[
    Topic {
        name: "gynecology",
        triggers: &["гинеколог", "gynecol", "женск", "матк", "uterus"],
        recommendations: &[
            "Pelvic ultrasound (if not performed within the last 6 months)",
            "Cervical cytology smear (Pap test), annually",
            "Hormone panel (estrogen, progesterone)",
        ],
    },
    Topic {
        name: "pregnancy",
        triggers: &["беремен", "pregnan", "плод"],
        recommendations: &[
            "Blood test for hCG (human chorionic gonadotropin)",
            "Fetal and uterine ultrasound",
            "Complete blood count and urinalysis",
        ],
    },
    Topic {
        name: "cardiovascular",
        triggers: &["сердц", "card", "давлен", "pressure", "гипертон"],
        recommendations: &[
            "ECG (electrocardiogram)",
            "Echocardiography (cardiac ultrasound)",
            "Blood cholesterol and lipid panel",
        ],
    },
    Topic {
        name: "diabetes",
        triggers: &["диабет", "diabet", "сахар", "glucose", "глюкоз"],
        recommendations: &[
            "Fasting blood glucose test",
            "Glycated hemoglobin (HbA1c)",
            "Glucose tolerance test",
        ],
    },
    Topic {
        name: "thyroid",
        triggers: &["щитовид", "thyroid", "гормон"],
        recommendations: &[
            "Thyroid hormone panel (TSH, T3, T4)",
            "Thyroid ultrasound",
        ],
    },
    Topic {
        name: "liver",
        triggers: &["печен", "liver", "гепат"],
        recommendations: &[
            "Liver panel (ALT, AST, bilirubin)",
            "Ultrasound of the liver and gallbladder",
        ],
    },
    Topic {
        name: "kidney",
        triggers: &["почк", "kidney", "renal"],
        recommendations: &[
            "Urinalysis",
            "Blood creatinine and urea test",
            "Kidney ultrasound",
        ],
    },
    Topic {
        name: "respiratory",
        triggers: &["легк", "lung", "бронх", "кашел"],
        recommendations: &[
            "Chest X-ray",
            "Spirometry (pulmonary function testing)",
        ],
    },
    Topic {
        name: "infection",
        triggers: &["инфекц", "infection", "воспален"],
        recommendations: &[
            "Complete blood count (white cells, ESR)",
            "C-reactive protein (CRP) test",
        ],
    },
    Topic {
        name: "anemia",
        triggers: &["анем", "anemia", "гемоглобин"],
        recommendations: &[
            "Complete blood count (hemoglobin, red cells)",
            "Iron and ferritin panel",
            "Vitamin B12 and folate levels",
        ],
    },
];

/// Fallback when no topic fires.
pub const GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Complete blood count and urinalysis",
    "Blood chemistry panel",
];

/// Always appended last, whatever matched.
pub const CLOSING_RECOMMENDATION: &str =
    "Follow-up consultation with the treating physician to discuss results";

/// Map detected medical topics to follow-up test suggestions.
///
/// `lower_text` must already be lowercased (the caller lowercases the
/// concatenated batch text once). Duplicate lines across co-firing topics
/// are kept as produced.
pub fn recommend(lower_text: &str) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    for topic in TOPICS {
        if topic.triggers.iter().any(|t| lower_text.contains(t)) {
            recommendations.extend(topic.recommendations.iter().map(|r| r.to_string()));
        }
    }

    if recommendations.is_empty() {
        recommendations.extend(GENERIC_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    }

    recommendations.push(CLOSING_RECOMMENDATION.to_string());
    recommendations
}
