pub mod compose;
pub mod extraction;
pub mod guidelines;
pub mod identity;
pub mod recommend;
pub mod runner;
pub mod sanitize;
pub mod scoring;

pub use compose::analyze;
pub use runner::DocumentReviewer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The caller supplied zero documents; the analysis must not run.
    #[error("no documents supplied for analysis")]
    NoInput,
}
