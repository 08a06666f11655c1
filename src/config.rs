/// Application-level constants
pub const APP_NAME: &str = "Medreview";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language hint handed to the OCR collaborator.
/// The analyzed documents mix Russian and English.
pub const OCR_LANGUAGES: &str = "eng+rus";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
