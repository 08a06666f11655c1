//! The assembled per-patient review report.
//!
//! Built once per analysis run and immutable afterwards; a new run produces
//! a new report. Rendering emits markdown blocks separated by a stable
//! marker so a presentation layer can do simple block-level rendering.

use serde::{Deserialize, Serialize};

use super::document::DocumentAnalysis;
use super::enums::{IdentityStatus, ScoreBand};
use crate::pipeline::identity::IdentityReconciliation;
use crate::pipeline::scoring::{caps, RequiredFieldCheck, ScoreBreakdown};

/// Stable separator between report sections.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Shown for extracted fields with no value.
const NOT_SPECIFIED: &str = "not specified";

/// Fixed document-quality guidance closing every report.
const DOCUMENT_GUIDANCE: &[&str] = &[
    "Make sure all patient information is legible and complete",
    "Check that dates use a standard format",
    "Confirm that all medical terminology is spelled correctly",
    "Verify that signatures and stamps are present where required",
];

/// Aggregated review of one patient's document batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientReport {
    pub documents: Vec<DocumentAnalysis>,
    pub identity: IdentityReconciliation,
    pub required_fields: Vec<RequiredFieldCheck>,
    pub score: ScoreBreakdown,
    pub band: ScoreBand,
    pub recommendations: Vec<String>,
}

impl PatientReport {
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Render the report as markdown sections in fixed order, joined by
    /// [`SECTION_SEPARATOR`].
    pub fn render_markdown(&self) -> String {
        let mut sections = vec![self.render_header()];
        for (position, document) in self.documents.iter().enumerate() {
            sections.push(render_document(position + 1, document));
        }
        sections.push(self.render_identity());
        sections.push(self.render_guidelines());
        sections.push(self.render_score());
        sections.push(self.render_required_fields());
        sections.push(self.render_recommendations());
        sections.push(render_guidance());
        sections.join(SECTION_SEPARATOR)
    }

    fn render_header(&self) -> String {
        format!(
            "# Medical document review\n\nDocuments analyzed: {}",
            self.document_count()
        )
    }

    fn render_identity(&self) -> String {
        let verdict = match self.identity.status {
            IdentityStatus::Confirmed => format!(
                "Confirmed: all documents name {}.",
                self.identity.canonical_name.as_deref().unwrap_or(NOT_SPECIFIED)
            ),
            IdentityStatus::Mismatch => format!(
                "Mismatch: documents name different patients: {}. \
                 The aggregate score and recommendations below may be unreliable.",
                self.identity.conflicting_names.join(", ")
            ),
            IdentityStatus::Unknown => {
                "Unknown: no patient name could be extracted from any document.".to_string()
            }
        };
        format!("## Patient identity\n\n{verdict}")
    }

    fn render_guidelines(&self) -> String {
        let mut section = String::from("## Guideline checks");
        for document in &self.documents {
            section.push_str(&format!("\n\n### {}\n", document.name));
            if document.recognition_failure.is_some() {
                section.push_str("\n- Skipped: document was not recognized");
                continue;
            }
            for finding in &document.guideline_findings {
                section.push_str(&format!("\n- {finding}"));
            }
        }
        section
    }

    fn render_score(&self) -> String {
        format!(
            "## Document quality score\n\n\
             Total: {}/100 — {}\n\n\
             - Completeness: {}/{}\n\
             - Formatting: {}/{}\n\
             - Terminology: {}/{}\n\
             - Authentication: {}/{}\n\
             - Contact information: {}/{}\n\n\
             {}",
            self.score.total,
            self.band.label(),
            self.score.completeness,
            caps::COMPLETENESS,
            self.score.formatting,
            caps::FORMATTING,
            self.score.terminology,
            caps::TERMINOLOGY,
            self.score.authentication,
            caps::AUTHENTICATION,
            self.score.contact,
            caps::CONTACT,
            self.band.commentary(),
        )
    }

    fn render_required_fields(&self) -> String {
        let mut section = String::from("## Required fields\n");
        for check in &self.required_fields {
            section.push_str(&format!(
                "\n- {}: {}",
                check.label,
                if check.found { "present" } else { "missing" }
            ));
        }

        section.push_str("\n\nWhat to add:\n");
        let missing: Vec<&RequiredFieldCheck> =
            self.required_fields.iter().filter(|c| !c.found).collect();
        if missing.is_empty() {
            section.push_str("\n- The documents contain all essential required fields");
        } else {
            for check in missing {
                section.push_str(&format!("\n- Add a clear {}", check.label));
            }
        }
        section
    }

    fn render_recommendations(&self) -> String {
        let mut section = String::from("## Recommended follow-up examinations\n");
        for recommendation in &self.recommendations {
            section.push_str(&format!("\n- {recommendation}"));
        }
        section
    }
}

fn render_document(position: usize, document: &DocumentAnalysis) -> String {
    let mut section = format!("## Document {position}: {}", document.name);

    if let Some(message) = &document.recognition_failure {
        section.push_str(&format!("\n\nRecognition failed: {message}"));
        return section;
    }

    let fields = &document.fields;
    section.push_str(&format!(
        "\n\n- Type: {}\n- Patient: {}\n- Doctor: {}\n- Visit date: {}",
        fields.document_type.label(),
        fields.patient_name.as_deref().unwrap_or(NOT_SPECIFIED),
        fields.doctor_name.as_deref().unwrap_or(NOT_SPECIFIED),
        fields.visit_date.as_deref().unwrap_or(NOT_SPECIFIED),
    ));

    if !document.excerpt.is_empty() {
        section.push_str(&format!("\n\nExtracted text:\n\n```\n{}\n```", document.excerpt));
    }
    section
}

fn render_guidance() -> String {
    let mut section = String::from("## Document quality guidance\n");
    for line in DOCUMENT_GUIDANCE {
        section.push_str(&format!("\n- {line}"));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentText;
    use crate::pipeline::analyze;

    fn sample_report() -> PatientReport {
        analyze(&[DocumentText::recognized(
            "scan.jpg",
            "Пациент: Иван Петров\nДата: 01.02.2023\nВрач: Dr. Smith\n\
             Диагноз: гипертония\nПодпись: ___",
        )])
        .unwrap()
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let markdown = sample_report().render_markdown();
        let order = [
            "# Medical document review",
            "## Document 1: scan.jpg",
            "## Patient identity",
            "## Guideline checks",
            "## Document quality score",
            "## Required fields",
            "## Recommended follow-up examinations",
            "## Document quality guidance",
        ];
        let mut last = 0;
        for heading in order {
            let position = markdown.find(heading).unwrap_or_else(|| {
                panic!("missing section {heading:?}");
            });
            assert!(position >= last, "section {heading:?} out of order");
            last = position;
        }
    }

    #[test]
    fn sections_joined_by_stable_marker() {
        let markdown = sample_report().render_markdown();
        // Header + 1 document + 6 fixed sections = 8 sections, 7 separators.
        assert_eq!(markdown.matches(SECTION_SEPARATOR).count(), 7);
    }

    #[test]
    fn fields_render_with_values() {
        let markdown = sample_report().render_markdown();
        assert!(markdown.contains("- Patient: Иван Петров"));
        assert!(markdown.contains("- Doctor: Dr. Smith"));
        assert!(markdown.contains("- Visit date: 01.02.2023"));
        assert!(markdown.contains("Total: 68/100 — Satisfactory"));
    }

    #[test]
    fn absent_fields_render_not_specified() {
        let report = analyze(&[DocumentText::recognized("x.jpg", "пусто")]).unwrap();
        let markdown = report.render_markdown();
        assert!(markdown.contains("- Patient: not specified"));
        assert!(markdown.contains("- Doctor: not specified"));
        assert!(markdown.contains("- Visit date: not specified"));
    }

    #[test]
    fn all_fields_present_renders_affirmative_line() {
        let markdown = sample_report().render_markdown();
        assert!(markdown.contains("- The documents contain all essential required fields"));
        assert!(!markdown.contains("- Add a clear"));
    }

    #[test]
    fn missing_fields_render_add_lines() {
        let report = analyze(&[DocumentText::recognized("x.jpg", "Пациент: Иван Петров")]).unwrap();
        let markdown = report.render_markdown();
        assert!(markdown.contains("- Add a clear Date"));
        assert!(markdown.contains("- Add a clear Signature"));
        assert!(!markdown.contains("all essential required fields"));
    }

    #[test]
    fn failed_document_renders_marker() {
        let report = analyze(&[
            DocumentText::recognized("ok.jpg", "Диагноз: ОРВИ"),
            DocumentText::failed("bad.jpg", "unreadable image: too dark"),
        ])
        .unwrap();
        let markdown = report.render_markdown();
        assert!(markdown.contains("## Document 2: bad.jpg"));
        assert!(markdown.contains("Recognition failed: unreadable image: too dark"));
        assert!(markdown.contains("- Skipped: document was not recognized"));
    }

    #[test]
    fn mismatch_verdict_lists_names() {
        let report = analyze(&[
            DocumentText::recognized("1.jpg", "Пациент: Иван Петров"),
            DocumentText::recognized("2.jpg", "Пациент: Анна Смирнова"),
        ])
        .unwrap();
        let markdown = report.render_markdown();
        assert!(markdown.contains("Mismatch: documents name different patients: Иван Петров, Анна Смирнова."));
    }

    #[test]
    fn guidance_block_always_closes_report() {
        let markdown = sample_report().render_markdown();
        assert!(markdown.ends_with("- Verify that signatures and stamps are present where required"));
    }
}
