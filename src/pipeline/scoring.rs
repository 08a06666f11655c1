//! Weighted document completeness/professionalism score.
//!
//! Five sub-scores, each independently capped before summing, so no single
//! heavy signal can overflow its bucket and the total stays in 0..=100 by
//! construction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::extraction::dates;

/// Sub-score caps.
pub mod caps {
    pub const COMPLETENESS: f32 = 40.0;
    pub const FORMATTING: u32 = 20;
    pub const TERMINOLOGY: u32 = 20;
    pub const AUTHENTICATION: u32 = 10;
    pub const CONTACT: u32 = 10;
}

/// Points per distinct matched medical term.
const POINTS_PER_TERM: u32 = 3;

/// Bilingual medical vocabulary scored under the terminology component.
const MEDICAL_TERMS: &[&str] = &[
    "диагноз",
    "diagnosis",
    "лечение",
    "treatment",
    "анализ",
    "test",
    "результат",
    "result",
    "рекомендации",
    "recommendation",
    "симптом",
    "symptom",
    "терапия",
    "therapy",
];

/// The fixed required-field table: label plus the keywords whose presence
/// in the lowercased text marks the field as found.
struct RequiredField {
    label: &'static str,
    keywords: &'static [&'static str],
}

const REQUIRED_FIELDS: &[RequiredField] = &[
    RequiredField {
        label: "Patient name",
        keywords: &["name", "patient", "имя", "пациент"],
    },
    RequiredField {
        label: "Date",
        keywords: &["date", "дата", "202", "201"],
    },
    RequiredField {
        label: "Doctor",
        keywords: &["doctor", "dr.", "physician", "врач", "доктор"],
    },
    RequiredField {
        label: "Diagnosis",
        keywords: &["diagnosis", "диагноз", "condition"],
    },
    RequiredField {
        label: "Signature",
        keywords: &["signature", "signed", "подпись"],
    },
];

/// One required document field with its computed presence flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredFieldCheck {
    pub label: String,
    pub keywords: Vec<String>,
    pub found: bool,
}

/// Run the fixed required-field checks over the lowercased batch text.
pub fn check_required_fields(lower_text: &str) -> Vec<RequiredFieldCheck> {
    REQUIRED_FIELDS
        .iter()
        .map(|field| RequiredFieldCheck {
            label: field.label.to_string(),
            keywords: field.keywords.iter().map(|k| k.to_string()).collect(),
            found: field.keywords.iter().any(|k| lower_text.contains(k)),
        })
        .collect()
}

/// Weighted 0-100 quality score. `total` is the rounded sum of the five
/// components, each independently capped (see [`caps`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub completeness: f32,
    pub formatting: u32,
    pub terminology: u32,
    pub authentication: u32,
    pub contact: u32,
    pub total: u32,
}

/// A capitalized "Firstname Lastname" bigram, either alphabet.
static PROPER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-ZА-ЯЁ][a-zа-яё]+\s+[A-ZА-ЯЁ][a-zа-яё]+").expect("invalid proper name pattern")
});

/// A phone-number-shaped token.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-\s]?\d{3}[-\s]?\d{4}").expect("invalid phone pattern"));

/// Score a patient's combined document text against the required-field
/// checks. Deterministic; empty text simply scores low, it is not an error.
pub fn score(text: &str, required_fields: &[RequiredFieldCheck]) -> ScoreBreakdown {
    let lower = text.to_lowercase();

    let found = required_fields.iter().filter(|f| f.found).count();
    let completeness = if required_fields.is_empty() {
        0.0
    } else {
        found as f32 / required_fields.len() as f32 * caps::COMPLETENESS
    };

    let mut formatting = 0;
    if text.chars().count() > 50 {
        formatting += 5;
    }
    if dates::contains_date_token(text) {
        formatting += 5;
    }
    if text.lines().count() > 3 {
        formatting += 5;
    }
    if PROPER_NAME.is_match(text) {
        formatting += 5;
    }

    let matched_terms = MEDICAL_TERMS.iter().filter(|t| lower.contains(*t)).count() as u32;
    let terminology = (matched_terms * POINTS_PER_TERM).min(caps::TERMINOLOGY);

    let mut authentication = 0;
    if contains_any(&lower, &["подпись", "signature"]) {
        authentication += 5;
    }
    if contains_any(&lower, &["печать", "stamp", "seal"]) {
        authentication += 5;
    }

    let mut contact = 0;
    if PHONE.is_match(text) {
        contact += 5;
    }
    if contains_any(&lower, &["клиника", "clinic", "hospital"]) {
        contact += 5;
    }

    let total =
        (completeness + (formatting + terminology + authentication + contact) as f32).round() as u32;

    ScoreBreakdown {
        completeness,
        formatting,
        terminology,
        authentication,
        contact,
        total,
    }
}

fn contains_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower_text.contains(k))
}
