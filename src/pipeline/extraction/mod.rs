pub mod classify;
pub mod dates;
pub mod fields;

pub use classify::classify_document_type;
pub use fields::{extract, ExtractedFields};
