// ==========================================
// Placement Prep Portal - Question domain model
// ==========================================

use crate::domain::types::{Difficulty, Topic};
use serde::{Deserialize, Serialize};

// ==========================================
// Question - interview question bank entry
// ==========================================
// Owns a reference to exactly one Company. company_id must resolve
// to a known company before a question is ever created; company_name
// is denormalized for display and filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub domain: String,          // business domain context, e.g. "Finance"
    pub role: String,            // specific role context
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub text: String,            // the question itself
    pub ideal_approach: String,  // structured answer guide for students
    pub asked_in_bits: bool,     // verified as asked in a campus placement round
    pub frequency: u32,
}
