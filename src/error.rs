use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for annograde operations.
///
/// The engine functions themselves never fail; these errors exist only at
/// the CLI and file I/O boundary.
#[derive(Debug, Error)]
pub enum AnnogradeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse annotation set from {path}: {source}")]
    SetJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write annotation set to {path}: {source}")]
    SetJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Annotation sets do not match within tolerance")]
    MatchFailed,

    #[error("Reconciliation found {incorrect} incorrect and {missing} missing shape(s)")]
    ReconcileFailed {
        correct: usize,
        incorrect: usize,
        missing: usize,
    },

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported shape family: {0}")]
    UnsupportedFamily(String),
}
