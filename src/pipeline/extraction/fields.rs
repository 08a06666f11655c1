//! Structured field extraction from one document's recognized text.
//!
//! Every field is derived by an explicit ordered list of strategies with
//! first-success-wins semantics, so the ordering itself is testable. A text
//! with no matching patterns yields all-default fields; extraction never
//! fails.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::classify::classify_document_type;
use super::dates;
use crate::models::enums::DocumentType;

/// Structured fields derived from one document's recognized text.
/// Immutable once computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    /// Raw matched date token, as written in the document.
    pub visit_date: Option<String>,
    /// `visit_date` normalized, when it parses as a real calendar date.
    pub visit_date_iso: Option<NaiveDate>,
    pub document_type: DocumentType,
}

/// Extract all structured fields from one document's text.
pub fn extract(text: &str) -> ExtractedFields {
    let visit_date = dates::find_date_token(text);
    ExtractedFields {
        patient_name: extract_patient_name(text),
        doctor_name: extract_doctor_name(text),
        visit_date_iso: visit_date.as_deref().and_then(dates::parse_date_token),
        visit_date,
        document_type: classify_document_type(text),
    }
}

// ─── Patient name ────────────────────────────────────────────────────────────

/// A "Пациент:"/"Patient:" label followed by a two- or three-token
/// capitalized name on the same line.
static PATIENT_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:пациент|patient)[ \t]*:[ \t]*([A-ZА-ЯЁ][a-zа-яё]+(?:[ \t]+[A-ZА-ЯЁ][a-zа-яё]+){1,2})",
    )
    .expect("invalid labeled patient pattern")
});

/// A standalone line that is exactly three capitalized tokens.
static FULL_NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZА-ЯЁ][a-zа-яё]+[ \t]+[A-ZА-ЯЁ][a-zа-яё]+[ \t]+[A-ZА-ЯЁ][a-zа-яё]+$")
        .expect("invalid name line pattern")
});

/// Ordered patient-name strategies; the first to return a name wins.
static PATIENT_STRATEGIES: &[fn(&str) -> Option<String>] = &[labeled_patient, bare_name_line];

fn extract_patient_name(text: &str) -> Option<String> {
    PATIENT_STRATEGIES.iter().find_map(|strategy| strategy(text))
}

fn labeled_patient(text: &str) -> Option<String> {
    PATIENT_LABELED
        .captures(text)
        .map(|captures| captures[1].to_string())
}

/// A bare three-token capitalized line under 100 characters is assumed to
/// be a name. Known to be false-positive-prone; kept deliberately.
fn bare_name_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| line.chars().count() < 100 && FULL_NAME_LINE.is_match(line))
        .map(str::to_string)
}

// ─── Doctor name ─────────────────────────────────────────────────────────────

/// Doctor-label alternatives in priority order. The bare "врач:" pattern
/// also matches the "лечащий врач:" form, so the last alternative never
/// fires on its own; the order is kept as documented.
static DOCTOR_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i:доктор)[ \t]*:[ \t]*([^\r\n]+)",
        r"(?i:врач)[ \t]*:[ \t]*([^\r\n]+)",
        r"(?i:doctor)[ \t]*:[ \t]*([^\r\n]+)",
        r"(?i:лечащий[ \t]+врач)[ \t]*:[ \t]*([^\r\n]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid doctor label pattern"))
    .collect()
});

fn extract_doctor_name(text: &str) -> Option<String> {
    DOCTOR_LABELS.iter().find_map(|label| {
        label
            .captures(text)
            .map(|captures| captures[1].trim().to_string())
            .filter(|name| !name.is_empty())
    })
}
