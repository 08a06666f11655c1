//! Text recognition boundary.
//!
//! Recognition itself is external to this crate. The pipeline only sees the
//! [`OcrEngine`] trait; a failed recognition is a per-document event that is
//! recorded in the report, never a batch abort.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("OCR engine initialization failed: {0}")]
    Init(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("unreadable image: {0}")]
    Unreadable(String),
}

/// OCR engine abstraction (allows mocking for tests).
pub trait OcrEngine {
    /// Recognize text in one document image.
    ///
    /// `language_hint` is a Tesseract-style language string such as
    /// `"eng+rus"`. An empty string is a valid result for a readable but
    /// blank image.
    fn recognize(&self, image: &[u8], language_hint: &str) -> Result<String, RecognitionError>;
}
