// ==========================================
// Placement Prep Portal - Resource domain model
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Resource - curated learning resource
// ==========================================
// Self-contained: no cross-entity references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,    // e.g. "Python", "SQL", "Product"
    pub source: String,      // provider, e.g. "Coursera", "YouTube"
    pub duration: String,    // free-form, e.g. "10 Hours", "Self-paced"
}
