//! # Export Error Types

use thiserror::Error;

/// Failures while producing the export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// printpdf could not build or serialize the document.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// The file could not be written.
    #[error("Could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output location is unusable.
    #[error("Invalid export target: {0}")]
    InvalidTarget(String),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
