// ==========================================
// Placement Prep Portal - Upload domain model
// ==========================================
// Report and batch bookkeeping for one bulk upload invocation.
// The report is transient (returned to the caller); the batch row
// is persisted as an audit trail.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// RecordKind - the four uploadable entity kinds
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Question,
    Resource,
    Recommendation,
    Whitelist,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Question => "question",
            RecordKind::Resource => "resource",
            RecordKind::Recommendation => "recommendation",
            RecordKind::Whitelist => "whitelist",
        }
    }

    /// Parse a kind name; accepts singular and plural forms
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "question" | "questions" => Some(RecordKind::Question),
            "resource" | "resources" => Some(RecordKind::Resource),
            "recommendation" | "recommendations" => Some(RecordKind::Recommendation),
            "whitelist" | "user" | "users" => Some(RecordKind::Whitelist),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// UploadReport - per-invocation outcome summary
// ==========================================
// Lifetime: one upload call; rendered by the caller, not persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadReport {
    pub success: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl UploadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical report for a file that could not be read or parsed
    pub fn file_failure() -> Self {
        Self {
            success: 0,
            failed: 1,
            errors: vec!["Failed to read or parse file.".to_string()],
        }
    }

    /// Record a row failure with its 1-based line number
    /// (the header is line 1, so the first data row is line 2)
    pub fn push_row_error(&mut self, line: usize, message: impl fmt::Display) {
        self.failed += 1;
        self.errors.push(format!("Line {}: {}", line, message));
    }
}

// ==========================================
// UploadBatch - persisted audit record
// ==========================================
// One row per upload invocation, written after the report is
// assembled. Bookkeeping failure never fails the upload itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadBatch {
    pub batch_id: String,              // UUID
    pub kind: RecordKind,
    pub file_name: Option<String>,
    pub total_rows: usize,             // parsed rows including the header
    pub success_rows: usize,
    pub failed_rows: usize,
    pub uploaded_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}
