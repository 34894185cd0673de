// ==========================================
// Placement Prep Portal - Company domain model
// ==========================================
// `name` is the natural key: bulk uploads deduplicate referenced
// company names within a file and against the known set before any
// question row is materialized.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Company - recruiter profile
// ==========================================
// Created on first reference (admin form or bulk upload), never
// deleted by the ingestion pipeline; the pipeline treats existing
// companies as immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,           // assigned by the persistence layer on creation
    pub name: String,         // natural key (case-sensitive)
    pub sector: String,       // e.g. "Finance", "Consulting", "Tech"
    pub logo: String,         // logo lookup URL derived from the name
    pub description: String,
    pub roles: Vec<String>,   // roles the company recruits for
}

// ==========================================
// CompanyDraft - creation payload
// ==========================================
// Same shape as Company minus the id, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub sector: String,
    pub logo: String,
    pub description: String,
    pub roles: Vec<String>,
}

impl CompanyDraft {
    /// Logo lookup convention: lower-cased name with whitespace
    /// stripped, resolved against the clearbit logo service.
    pub fn derive_logo_url(name: &str) -> String {
        let slug: String = name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("https://logo.clearbit.com/{}.com", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_logo_url_strips_whitespace() {
        assert_eq!(
            CompanyDraft::derive_logo_url("JPMorgan Chase"),
            "https://logo.clearbit.com/jpmorganchase.com"
        );
    }

    #[test]
    fn test_derive_logo_url_lowercases() {
        assert_eq!(
            CompanyDraft::derive_logo_url("Amazon"),
            "https://logo.clearbit.com/amazon.com"
        );
    }
}
