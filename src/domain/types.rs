// ==========================================
// Placement Prep Portal - Domain type definitions
// ==========================================
// Closed enumerations used across the question bank, resource
// library, recommendations and the access whitelist.
// CSV uploads coerce unknown values to a per-type default instead
// of failing the row.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Difficulty
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Coerce an uploaded value; unknown values fall back to Medium
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Topic (question classification)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Analytics,
    #[serde(rename = "Product Management")]
    Product,
    Finance,
    Consulting,
    Behavioral,
    #[serde(rename = "SQL")]
    Sql,
    Python,
    #[serde(rename = "Data Science")]
    DataScience,
    General,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Analytics => "Analytics",
            Topic::Product => "Product Management",
            Topic::Finance => "Finance",
            Topic::Consulting => "Consulting",
            Topic::Behavioral => "Behavioral",
            Topic::Sql => "SQL",
            Topic::Python => "Python",
            Topic::DataScience => "Data Science",
            Topic::General => "General",
        }
    }

    /// Coerce an uploaded value; unknown values fall back to General
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "Analytics" => Topic::Analytics,
            "Product Management" => Topic::Product,
            "Finance" => Topic::Finance,
            "Consulting" => Topic::Consulting,
            "Behavioral" => Topic::Behavioral,
            "SQL" => Topic::Sql,
            "Python" => Topic::Python,
            "Data Science" => Topic::DataScience,
            "General" => Topic::General,
            _ => Topic::General,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Subject (faculty recommendation context)
// ==========================================
// Aligned with the MBA analytics curriculum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Python,
    #[serde(rename = "R Programming")]
    R,
    #[serde(rename = "Data Visualization")]
    DataViz,
    #[serde(rename = "Introduction to Statistics")]
    Stats,
    #[serde(rename = "Time Series Analysis")]
    TimeSeries,
    #[serde(rename = "Database Modelling & Warehousing")]
    Db,
    #[serde(rename = "Marketing Management")]
    Marketing,
    #[serde(rename = "Predictive Analytics")]
    Predictive,
    #[serde(rename = "Deep Learning For Business")]
    DeepLearning,
    #[serde(rename = "Human Resources")]
    Hr,
    #[serde(rename = "NLP")]
    Nlp,
    #[serde(rename = "Financial Analytics")]
    Finance,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Python => "Python",
            Subject::R => "R Programming",
            Subject::DataViz => "Data Visualization",
            Subject::Stats => "Introduction to Statistics",
            Subject::TimeSeries => "Time Series Analysis",
            Subject::Db => "Database Modelling & Warehousing",
            Subject::Marketing => "Marketing Management",
            Subject::Predictive => "Predictive Analytics",
            Subject::DeepLearning => "Deep Learning For Business",
            Subject::Hr => "Human Resources",
            Subject::Nlp => "NLP",
            Subject::Finance => "Financial Analytics",
        }
    }

    /// Coerce an uploaded value; unknown values fall back to Python
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "Python" => Subject::Python,
            "R Programming" => Subject::R,
            "Data Visualization" => Subject::DataViz,
            "Introduction to Statistics" => Subject::Stats,
            "Time Series Analysis" => Subject::TimeSeries,
            "Database Modelling & Warehousing" => Subject::Db,
            "Marketing Management" => Subject::Marketing,
            "Predictive Analytics" => Subject::Predictive,
            "Deep Learning For Business" => Subject::DeepLearning,
            "Human Resources" => Subject::Hr,
            "NLP" => Subject::Nlp,
            "Financial Analytics" => Subject::Finance,
            _ => Subject::Python,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// UserRole (whitelist access level)
// ==========================================
// Stored lowercase, matching the user_roles table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Faculty,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Faculty => "faculty",
            UserRole::Student => "student",
        }
    }

    /// Coerce an uploaded value (case-insensitive); unknown values
    /// fall back to Student
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "faculty" => UserRole::Faculty,
            "student" => UserRole::Student,
            _ => UserRole::Student,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// AuthProvider (identity provider of a whitelist entry)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    Local,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Local => "local",
        }
    }

    /// Coerce an uploaded value (case-insensitive); unknown values
    /// fall back to Google
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "google" => AuthProvider::Google,
            "local" => AuthProvider::Local,
            _ => AuthProvider::Google,
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_lenient() {
        assert_eq!(Difficulty::parse_lenient("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::parse_lenient("  Easy "), Difficulty::Easy);
        // Unknown and case-mismatched values coerce to Medium
        assert_eq!(Difficulty::parse_lenient("hard"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient("Impossible"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient(""), Difficulty::Medium);
    }

    #[test]
    fn test_topic_parse_lenient() {
        assert_eq!(Topic::parse_lenient("SQL"), Topic::Sql);
        assert_eq!(Topic::parse_lenient("Data Science"), Topic::DataScience);
        assert_eq!(Topic::parse_lenient("Blockchain"), Topic::General);
    }

    #[test]
    fn test_subject_parse_lenient() {
        assert_eq!(Subject::parse_lenient("NLP"), Subject::Nlp);
        assert_eq!(Subject::parse_lenient("Astrology"), Subject::Python);
    }

    #[test]
    fn test_user_role_parse_lenient() {
        assert_eq!(UserRole::parse_lenient("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::parse_lenient("faculty"), UserRole::Faculty);
        assert_eq!(UserRole::parse_lenient("owner"), UserRole::Student);
    }

    #[test]
    fn test_auth_provider_parse_lenient() {
        assert_eq!(AuthProvider::parse_lenient("Local"), AuthProvider::Local);
        assert_eq!(AuthProvider::parse_lenient("github"), AuthProvider::Google);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Topic::Product.to_string(), "Product Management");
        assert_eq!(Subject::Db.to_string(), "Database Modelling & Warehousing");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }
}
