pub mod document;
pub mod enums;
pub mod report;

pub use document::*;
pub use enums::*;
pub use report::*;
