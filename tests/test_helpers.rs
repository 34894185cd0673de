// ==========================================
// Test helpers
// ==========================================
// Temp-database bootstrap and an in-memory recording repository for
// asserting on creation-call counts and captured records.
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use prep_portal::domain::types::UserRole;
use prep_portal::domain::{
    Company, CompanyDraft, Question, Recommendation, Resource, UploadBatch, WhitelistEntry,
};
use prep_portal::repository::{ContentRepository, RepositoryError, RepositoryResult};
use prep_portal::db;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Create a temporary content database with the schema applied
///
/// # Returns
/// - NamedTempFile: temp DB file (must stay alive for the test)
/// - String: database path
pub fn create_test_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().expect("temp db file");
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = db::open_connection(&db_path).expect("open test db");
    db::init_schema(&conn).expect("init test schema");

    (temp_file, db_path)
}

/// Write CSV content to a temp file with a .csv extension
pub fn write_csv_fixture(content: &str) -> NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp csv file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

// ==========================================
// RecordingRepository - in-memory ContentRepository
// ==========================================
// Captures every record and counts company-creation calls, so tests
// can assert at-most-one-creation and failure attribution without a
// real database. Optional knobs simulate slow and failing company
// creation.
#[derive(Default)]
pub struct RecordingRepository {
    inner: Mutex<Inner>,

    /// Company names whose creation fails
    pub failing_companies: HashSet<String>,

    /// Delay applied to every company creation
    pub create_delay: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    companies: Vec<Company>,
    questions: Vec<Question>,
    resources: Vec<Resource>,
    recommendations: Vec<Recommendation>,
    whitelist: HashMap<String, WhitelistEntry>,
    batches: Vec<UploadBatch>,
    company_create_calls: usize,
    next_company_seq: usize,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the known-company set
    pub fn with_companies(companies: Vec<Company>) -> Self {
        let repo = Self::new();
        repo.inner.lock().unwrap().companies = companies;
        repo
    }

    pub fn company_create_calls(&self) -> usize {
        self.inner.lock().unwrap().company_create_calls
    }

    pub fn companies(&self) -> Vec<Company> {
        self.inner.lock().unwrap().companies.clone()
    }

    pub fn questions(&self) -> Vec<Question> {
        self.inner.lock().unwrap().questions.clone()
    }

    pub fn resources(&self) -> Vec<Resource> {
        self.inner.lock().unwrap().resources.clone()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.inner.lock().unwrap().recommendations.clone()
    }

    pub fn whitelist_entries(&self) -> Vec<WhitelistEntry> {
        self.inner.lock().unwrap().whitelist.values().cloned().collect()
    }

    pub fn batches(&self) -> Vec<UploadBatch> {
        self.inner.lock().unwrap().batches.clone()
    }
}

#[async_trait]
impl ContentRepository for RecordingRepository {
    async fn list_companies(&self) -> RepositoryResult<Vec<Company>> {
        Ok(self.inner.lock().unwrap().companies.clone())
    }

    async fn create_company(&self, draft: CompanyDraft) -> RepositoryResult<Company> {
        // Count the attempt before any delay, so a timed-out call is
        // still visible to call-count assertions
        {
            let mut inner = self.inner.lock().unwrap();
            inner.company_create_calls += 1;
        }

        if let Some(delay) = self.create_delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_companies.contains(&draft.name) {
            return Err(RepositoryError::Query(format!(
                "insert rejected for {}",
                draft.name
            )));
        }

        let mut inner = self.inner.lock().unwrap();
        inner.next_company_seq += 1;
        let company = Company {
            id: format!("c{}", inner.next_company_seq),
            name: draft.name,
            sector: draft.sector,
            logo: draft.logo,
            description: draft.description,
            roles: draft.roles,
        };
        inner.companies.push(company.clone());
        Ok(company)
    }

    async fn create_question(&self, question: Question) -> RepositoryResult<()> {
        self.inner.lock().unwrap().questions.push(question);
        Ok(())
    }

    async fn create_resource(&self, resource: Resource) -> RepositoryResult<()> {
        self.inner.lock().unwrap().resources.push(resource);
        Ok(())
    }

    async fn create_recommendation(
        &self,
        recommendation: Recommendation,
    ) -> RepositoryResult<()> {
        self.inner
            .lock()
            .unwrap()
            .recommendations
            .push(recommendation);
        Ok(())
    }

    async fn upsert_whitelist_entry(&self, entry: WhitelistEntry) -> RepositoryResult<()> {
        self.inner
            .lock()
            .unwrap()
            .whitelist
            .insert(entry.email.clone(), entry);
        Ok(())
    }

    async fn role_for_email(&self, email: &str) -> RepositoryResult<Option<UserRole>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .whitelist
            .get(email)
            .map(|e| e.role))
    }

    async fn insert_upload_batch(&self, batch: UploadBatch) -> RepositoryResult<()> {
        self.inner.lock().unwrap().batches.push(batch);
        Ok(())
    }

    async fn recent_upload_batches(&self, limit: usize) -> RepositoryResult<Vec<UploadBatch>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.batches.iter().rev().take(limit).cloned().collect())
    }

    async fn count_companies(&self) -> RepositoryResult<usize> {
        Ok(self.inner.lock().unwrap().companies.len())
    }

    async fn count_questions(&self) -> RepositoryResult<usize> {
        Ok(self.inner.lock().unwrap().questions.len())
    }

    async fn count_resources(&self) -> RepositoryResult<usize> {
        Ok(self.inner.lock().unwrap().resources.len())
    }

    async fn count_recommendations(&self) -> RepositoryResult<usize> {
        Ok(self.inner.lock().unwrap().recommendations.len())
    }
}
