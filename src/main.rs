//! CLI entry point: analyze already-recognized document text files and
//! print the patient report.
//!
//! Scanned images go through an OCR engine before they reach this tool;
//! the CLI covers the plain-text route, reading one `.txt` file per
//! document. Unreadable files are recorded as per-document failures, the
//! same way a failed recognition would be.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use medreview::config;
use medreview::models::document::DocumentText;
use medreview::pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let mut as_json = false;
    let mut paths: Vec<String> = Vec::new();
    for argument in std::env::args().skip(1) {
        match argument.as_str() {
            "--json" => as_json = true,
            _ => paths.push(argument),
        }
    }

    if paths.is_empty() {
        eprintln!("usage: medreview [--json] <recognized-text-file>...");
        return ExitCode::FAILURE;
    }

    let documents = load_documents(&paths);

    match pipeline::analyze(&documents) {
        Ok(report) => {
            if as_json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("error: failed to serialize report: {error}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", report.render_markdown());
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Read each file into a recognized document; an unreadable file becomes a
/// per-document failure so the rest of the batch still runs.
fn load_documents(paths: &[String]) -> Vec<DocumentText> {
    paths
        .iter()
        .map(|path| {
            let name = display_name(path);
            match std::fs::read_to_string(path) {
                Ok(text) => DocumentText::recognized(name, text),
                Err(error) => {
                    tracing::warn!(file = %path, error = %error, "failed to read document file");
                    DocumentText::failed(name, error.to_string())
                }
            }
        })
        .collect()
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use medreview::models::document::OcrOutcome;

    #[test]
    fn loads_files_as_recognized_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visit.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Пациент: Иван Петров").unwrap();

        let documents = load_documents(&[path.to_string_lossy().into_owned()]);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "visit.txt");
        match &documents[0].outcome {
            OcrOutcome::Text(text) => assert!(text.contains("Иван Петров")),
            OcrOutcome::Failed(message) => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn missing_file_becomes_document_failure() {
        let documents = load_documents(&["/nonexistent/report.txt".to_string()]);
        assert_eq!(documents.len(), 1);
        assert!(matches!(documents[0].outcome, OcrOutcome::Failed(_)));
    }

    #[test]
    fn display_name_uses_file_name_component() {
        assert_eq!(display_name("/tmp/scans/visit.txt"), "visit.txt");
        assert_eq!(display_name("visit.txt"), "visit.txt");
    }
}
