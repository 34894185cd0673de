// ==========================================
// Placement Prep Portal - Domain layer
// ==========================================
// Entities owned by the portal: question bank, resource library,
// company profiles, faculty recommendations, access whitelist,
// and the transient upload report/batch records.
// ==========================================

// Module declarations
pub mod company;
pub mod question;
pub mod recommendation;
pub mod resource;
pub mod types;
pub mod upload;
pub mod whitelist;

// Re-export core entities
pub use company::{Company, CompanyDraft};
pub use question::Question;
pub use recommendation::Recommendation;
pub use resource::Resource;
pub use upload::{RecordKind, UploadBatch, UploadReport};
pub use whitelist::WhitelistEntry;
