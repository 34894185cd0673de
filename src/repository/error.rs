// ==========================================
// Placement Prep Portal - Repository error types
// ==========================================
// Tooling: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Repository layer error type
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Connection errors =====
    #[error("database connection failed: {0}")]
    Connection(String),

    // ===== Query errors =====
    #[error("database query failed: {0}")]
    Query(String),

    #[error("record not found: {0}")]
    NotFound(String),

    // ===== Serialization errors =====
    #[error("stored value could not be decoded: {0}")]
    Decode(String),

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        RepositoryError::Query(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}

/// Result alias for the repository layer
pub type RepositoryResult<T> = Result<T, RepositoryError>;
