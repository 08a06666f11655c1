use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::extraction::ExtractedFields;

/// A scanned document as supplied by the caller: a display name plus the
/// raw image bytes handed to the OCR collaborator. Consumed once per run.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub image: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, image: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// Per-document recognition outcome. A failure is recorded inline so the
/// rest of the batch can continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrOutcome {
    Text(String),
    Failed(String),
}

/// A document after text recognition, before analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentText {
    pub name: String,
    pub outcome: OcrOutcome,
}

impl DocumentText {
    pub fn recognized(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: OcrOutcome::Text(text.into()),
        }
    }

    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: OcrOutcome::Failed(message.into()),
        }
    }
}

/// Everything the pipeline derived from a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub id: Uuid,
    pub name: String,
    /// Error message when recognition failed for this document.
    pub recognition_failure: Option<String>,
    pub fields: ExtractedFields,
    pub guideline_findings: Vec<String>,
    /// Leading characters of the recognized text, for display.
    pub excerpt: String,
}

impl DocumentAnalysis {
    /// Deterministic id: a v5 hash of batch position and document name, so
    /// an identical batch always produces an identical report.
    pub fn document_id(index: usize, name: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{index}:{name}").as_bytes())
    }
}
