//! Report assembly: the pure fan-in step.
//!
//! Takes per-document recognition outcomes, runs every analysis stage, and
//! assembles one [`PatientReport`]. No decision logic beyond putting
//! sub-results together; the same input always yields the same report.

use super::{extraction, guidelines, identity, recommend, sanitize, scoring, AnalysisError};
use crate::models::document::{DocumentAnalysis, DocumentText, OcrOutcome};
use crate::models::enums::ScoreBand;
use crate::models::report::PatientReport;

/// Characters of recognized text carried into each document's summary.
pub const EXCERPT_CHARS: usize = 500;

/// Analyze one patient's recognized documents into a report.
///
/// This is the whole pipeline as a pure function of its input: documents
/// whose recognition failed keep their slot with a failure marker, the
/// score and recommendations are computed over the concatenated text of
/// the successfully recognized documents, and zero documents is a caller
/// error.
pub fn analyze(documents: &[DocumentText]) -> Result<PatientReport, AnalysisError> {
    if documents.is_empty() {
        return Err(AnalysisError::NoInput);
    }

    let mut analyses = Vec::with_capacity(documents.len());
    let mut combined = String::new();

    for (index, document) in documents.iter().enumerate() {
        let id = DocumentAnalysis::document_id(index, &document.name);
        match &document.outcome {
            OcrOutcome::Text(raw) => {
                let text = sanitize::sanitize_recognized_text(raw);
                let fields = extraction::extract(&text);
                let guideline_findings = guidelines::check(&text, fields.document_type);
                if !combined.is_empty() {
                    combined.push('\n');
                }
                combined.push_str(&text);
                analyses.push(DocumentAnalysis {
                    id,
                    name: document.name.clone(),
                    recognition_failure: None,
                    excerpt: text.chars().take(EXCERPT_CHARS).collect(),
                    fields,
                    guideline_findings,
                });
            }
            OcrOutcome::Failed(message) => {
                analyses.push(DocumentAnalysis {
                    id,
                    name: document.name.clone(),
                    recognition_failure: Some(message.clone()),
                    excerpt: String::new(),
                    fields: Default::default(),
                    guideline_findings: Vec::new(),
                });
            }
        }
    }

    let patient_names: Vec<Option<String>> = analyses
        .iter()
        .map(|analysis| analysis.fields.patient_name.clone())
        .collect();
    let identity = identity::reconcile(&patient_names);

    let lower = combined.to_lowercase();
    let required_fields = scoring::check_required_fields(&lower);
    let score = scoring::score(&combined, &required_fields);
    let band = ScoreBand::from_score(score.total);
    let recommendations = recommend::recommend(&lower);

    Ok(PatientReport {
        documents: analyses,
        identity,
        required_fields,
        score,
        band,
        recommendations,
    })
}
