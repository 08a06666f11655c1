//! Heuristic completeness and quality review for scanned medical documents.
//!
//! The pipeline takes raw OCR text for one patient's documents, extracts
//! structured fields, cross-checks patient identity across documents,
//! scores completeness and professionalism, and produces content-triggered
//! follow-up recommendations, all through explicit, inspectable keyword
//! and regex tables. Text recognition itself is an external collaborator
//! behind the [`ocr::OcrEngine`] trait; a per-document recognition failure
//! is recorded in the report while the rest of the batch proceeds.

pub mod config;
pub mod models;
pub mod ocr;
pub mod pipeline;

pub use models::report::PatientReport;
pub use pipeline::{analyze, AnalysisError, DocumentReviewer};
