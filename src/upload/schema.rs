// ==========================================
// Placement Prep Portal - Upload schemas and column mapping
// ==========================================
// One explicit column table per record kind. Header validation is
// order-independent and case-insensitive; field access goes through
// a ColumnMap resolved from the actual header, so a file with
// reordered recognized headers still ingests correctly.
// ==========================================

use crate::domain::RecordKind;
use crate::upload::csv_parser::ParsedRow;
use std::collections::HashMap;

// ===== Canonical column names =====

pub const COL_COMPANY: &str = "Company";
pub const COL_DOMAIN: &str = "Domain";
pub const COL_ROLE: &str = "Role";
pub const COL_TOPIC: &str = "Topic";
pub const COL_DIFFICULTY: &str = "Difficulty";
pub const COL_QUESTION: &str = "Question";
pub const COL_IDEAL_APPROACH: &str = "Ideal_Approach";
pub const COL_ASKED_IN_BITS: &str = "Asked_In_BITS";

pub const COL_TITLE: &str = "Title";
pub const COL_URL: &str = "URL";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_CATEGORY: &str = "Category";
pub const COL_SOURCE: &str = "Source";
pub const COL_DURATION: &str = "Duration";

pub const COL_FACULTY_NAME: &str = "Faculty Name";
pub const COL_SUBJECT: &str = "Subject";
pub const COL_GOAL: &str = "Goal";
pub const COL_EXPECTED_LEARNING: &str = "Expected Learning";
pub const COL_REMARKS: &str = "Remarks";
pub const COL_TIME_ESTIMATE: &str = "Time Estimate";

pub const COL_EMAIL: &str = "Email";
pub const COL_USER_ROLE: &str = "Role";
pub const COL_AUTH_PROVIDER: &str = "Auth Provider";
pub const COL_NAME: &str = "Name";

/// Canonical header set for a record kind, in template order
pub fn expected_headers(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Question => &[
            COL_COMPANY,
            COL_DOMAIN,
            COL_ROLE,
            COL_TOPIC,
            COL_DIFFICULTY,
            COL_QUESTION,
            COL_IDEAL_APPROACH,
            COL_ASKED_IN_BITS,
        ],
        RecordKind::Resource => &[
            COL_TITLE,
            COL_URL,
            COL_DESCRIPTION,
            COL_CATEGORY,
            COL_SOURCE,
            COL_DURATION,
        ],
        RecordKind::Recommendation => &[
            COL_FACULTY_NAME,
            COL_TITLE,
            COL_URL,
            COL_DESCRIPTION,
            COL_SUBJECT,
            COL_GOAL,
            COL_EXPECTED_LEARNING,
            COL_REMARKS,
            COL_TIME_ESTIMATE,
        ],
        RecordKind::Whitelist => &[COL_EMAIL, COL_USER_ROLE, COL_AUTH_PROVIDER, COL_NAME],
    }
}

/// Minimum field count a data row must have for this kind
pub fn min_fields(kind: RecordKind) -> usize {
    match kind {
        RecordKind::Question => 6,
        RecordKind::Resource => 3,
        RecordKind::Recommendation => 6,
        RecordKind::Whitelist => 2,
    }
}

/// Validate an uploaded header row against the expected header set
///
/// - fails when the header has fewer fields than expected
/// - otherwise both sides are trim+lowercase normalized and every
///   expected header must appear somewhere (order-independent,
///   extra columns tolerated)
pub fn validate_headers(header_row: &[String], expected: &[&str]) -> bool {
    if header_row.len() < expected.len() {
        return false;
    }

    let normalized: Vec<String> = header_row
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    expected
        .iter()
        .all(|e| normalized.iter().any(|h| h == &e.to_lowercase()))
}

// ==========================================
// ColumnMap - canonical column -> actual index
// ==========================================
// Resolved once per file from the uploaded header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    /// Resolve the column map for `kind` from an uploaded header row
    ///
    /// Returns None when the header fails validation (missing
    /// expected columns or too few fields).
    pub fn build(header_row: &[String], kind: RecordKind) -> Option<Self> {
        let expected = expected_headers(kind);
        if !validate_headers(header_row, expected) {
            return None;
        }

        let mut indices = HashMap::with_capacity(expected.len());
        for name in expected {
            let lowered = name.to_lowercase();
            let position = header_row
                .iter()
                .position(|h| h.trim().to_lowercase() == lowered)?;
            indices.insert(lowered, position);
        }

        Some(Self { indices })
    }

    /// Read a field from a data row by canonical column name
    ///
    /// Returns None for unmapped columns, rows too short to carry the
    /// column, and blank values.
    pub fn field<'a>(&self, row: &'a ParsedRow, column: &str) -> Option<&'a str> {
        let idx = *self.indices.get(&column.to_lowercase())?;
        let value = row.get(idx)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Read a field with a fixed default for blank/missing values
    pub fn field_or<'a>(&self, row: &'a ParsedRow, column: &str, default: &'a str) -> &'a str {
        self.field(row, column).unwrap_or(default)
    }
}
