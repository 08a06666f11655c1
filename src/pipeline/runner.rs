//! Batch runner: recognizes each document and fans the results into one
//! report.
//!
//! Documents are processed sequentially in input order. A recognition
//! failure is recorded for that document and the batch continues; only an
//! empty batch aborts the run. Cancelling means abandoning the call;
//! a partial report is never produced.

use super::{compose, AnalysisError};
use crate::config;
use crate::models::document::{DocumentText, SourceDocument};
use crate::models::report::PatientReport;
use crate::ocr::OcrEngine;

/// Drives one patient's documents through recognition and analysis.
pub struct DocumentReviewer {
    engine: Box<dyn OcrEngine>,
}

impl DocumentReviewer {
    pub fn new(engine: Box<dyn OcrEngine>) -> Self {
        Self { engine }
    }

    /// Run the full pipeline over one patient's scanned documents.
    pub fn review(&self, documents: &[SourceDocument]) -> Result<PatientReport, AnalysisError> {
        if documents.is_empty() {
            return Err(AnalysisError::NoInput);
        }

        tracing::info!(documents = documents.len(), "starting document review");

        let mut texts = Vec::with_capacity(documents.len());
        for document in documents {
            match self.engine.recognize(&document.image, config::OCR_LANGUAGES) {
                Ok(text) => {
                    tracing::info!(
                        document = %document.name,
                        chars = text.chars().count(),
                        "recognition complete"
                    );
                    texts.push(DocumentText::recognized(&document.name, text));
                }
                Err(error) => {
                    tracing::warn!(
                        document = %document.name,
                        error = %error,
                        "recognition failed, continuing with remaining documents"
                    );
                    texts.push(DocumentText::failed(&document.name, error.to_string()));
                }
            }
        }

        compose::analyze(&texts)
    }
}
