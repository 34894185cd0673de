// ==========================================
// Placement Prep Portal - Upload error types
// ==========================================
// Typed errors cover file and infrastructure failures only.
// Row-level failures are report strings (see UploadReport), never
// typed errors: a bad row must not abort the batch.
// Tooling: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Upload pipeline error type
#[derive(Error, Debug)]
pub enum UploadError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is accepted)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::FileReadError(err.to_string())
    }
}

/// Result alias for the upload layer
pub type UploadResult<T> = Result<T, UploadError>;
