// ==========================================
// Placement Prep Portal - Faculty recommendation domain model
// ==========================================

use crate::domain::types::Subject;
use serde::{Deserialize, Serialize};

// ==========================================
// Recommendation - faculty-recommended practice material
// ==========================================
// Self-contained: no cross-entity references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub faculty_name: String,
    pub date: String,                     // recommendation date (YYYY-MM-DD)

    // Content
    pub title: String,
    pub url: Option<String>,
    pub description: String,

    // Context
    pub subject: Subject,

    // Pedagogy
    pub goal: String,
    pub expected_learning: String,
    pub remarks: Option<String>,
    pub time_to_complete: Option<String>,
}
