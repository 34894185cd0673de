// ==========================================
// Placement Prep Portal - Core Library
// ==========================================
// Content management backend for the placement cohort
// Stack: Rust + SQLite
// Core surface: bulk CSV ingestion pipeline
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Upload layer - bulk CSV ingestion
pub mod upload;

// Config layer - runtime configuration
pub mod config;

// Database infrastructure (connection init / PRAGMA unification)
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{AuthProvider, Difficulty, Subject, Topic, UserRole};

// Domain entities
pub use domain::{
    Company, CompanyDraft, Question, Recommendation, RecordKind, Resource, UploadBatch,
    UploadReport, WhitelistEntry,
};

// Repository
pub use repository::{ContentRepository, SqliteContentRepository};

// Upload pipeline
pub use upload::{BulkUploader, BulkUploaderImpl};

// Config
pub use config::{ConfigManager, StaticUploadConfig, UploadConfigReader};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Placement Prep Portal";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
