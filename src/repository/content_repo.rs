// ==========================================
// Placement Prep Portal - Content Repository Trait
// ==========================================
// Data access interface for all portal entities. The bulk upload
// pipeline only talks to this trait; the SQLite implementation is
// the crate-local stand-in for the hosted database service.
// Repositories contain no business rules, only CRUD.
// ==========================================

use crate::domain::types::UserRole;
use crate::domain::{
    Company, CompanyDraft, Question, Recommendation, Resource, UploadBatch, WhitelistEntry,
};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// ContentRepository Trait
// ==========================================
// Implementor: SqliteContentRepository
#[async_trait]
pub trait ContentRepository: Send + Sync {
    // ===== Companies =====

    /// List every known company
    ///
    /// The upload pipeline loads this once per invocation as the
    /// read-only "known set" for company resolution.
    async fn list_companies(&self) -> RepositoryResult<Vec<Company>>;

    /// Create a company and return it with its assigned id
    async fn create_company(&self, draft: CompanyDraft) -> RepositoryResult<Company>;

    // ===== Record creation =====

    /// Create a question (company_id must reference a known company)
    async fn create_question(&self, question: Question) -> RepositoryResult<()>;

    /// Create a learning resource
    async fn create_resource(&self, resource: Resource) -> RepositoryResult<()>;

    /// Create a faculty recommendation
    async fn create_recommendation(
        &self,
        recommendation: Recommendation,
    ) -> RepositoryResult<()>;

    // ===== Whitelist =====

    /// Insert or replace a whitelist entry (keyed by email)
    async fn upsert_whitelist_entry(&self, entry: WhitelistEntry) -> RepositoryResult<()>;

    /// Look up the role granted to an email
    ///
    /// # Returns
    /// - Ok(Some(role)): email is whitelisted
    /// - Ok(None): email is unknown (caller treats as plain student)
    async fn role_for_email(&self, email: &str) -> RepositoryResult<Option<UserRole>>;

    // ===== Upload batch audit trail =====

    /// Record one upload invocation
    async fn insert_upload_batch(&self, batch: UploadBatch) -> RepositoryResult<()>;

    /// Most recent upload batches, newest first
    async fn recent_upload_batches(&self, limit: usize) -> RepositoryResult<Vec<UploadBatch>>;

    // ===== Counts =====

    async fn count_companies(&self) -> RepositoryResult<usize>;
    async fn count_questions(&self) -> RepositoryResult<usize>;
    async fn count_resources(&self) -> RepositoryResult<usize>;
    async fn count_recommendations(&self) -> RepositoryResult<usize>;
}
