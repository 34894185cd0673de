// ==========================================
// Placement Prep Portal - Content Repository (SQLite)
// ==========================================
// rusqlite-backed implementation of ContentRepository.
// Connections go through db::open_connection so PRAGMA behavior
// is identical everywhere.
// ==========================================

use crate::db;
use crate::domain::types::UserRole;
use crate::domain::{
    Company, CompanyDraft, Question, RecordKind, Recommendation, Resource, UploadBatch,
    WhitelistEntry,
};
use crate::repository::content_repo::ContentRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

// ==========================================
// SqliteContentRepository
// ==========================================
pub struct SqliteContentRepository {
    db_path: String,
}

impl SqliteContentRepository {
    /// Open (and bootstrap) the content database at `db_path`
    pub fn new(db_path: impl Into<String>) -> RepositoryResult<Self> {
        let db_path = db_path.into();
        let conn = db::open_connection(&db_path)
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        db::init_schema(&conn)?;
        Ok(Self { db_path })
    }

    fn connect(&self) -> RepositoryResult<Connection> {
        db::open_connection(&self.db_path)
            .map_err(|e| RepositoryError::Connection(e.to_string()))
    }

    fn company_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(Company, String)> {
        // roles column holds a JSON array; decoded by the caller
        Ok((
            Company {
                id: row.get(0)?,
                name: row.get(1)?,
                sector: row.get(2)?,
                logo: row.get(3)?,
                description: row.get(4)?,
                roles: Vec::new(),
            },
            row.get::<_, String>(5)?,
        ))
    }
}

#[async_trait]
impl ContentRepository for SqliteContentRepository {
    async fn list_companies(&self) -> RepositoryResult<Vec<Company>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, sector, logo, description, roles FROM companies ORDER BY name",
        )?;

        let rows = stmt
            .query_map([], Self::company_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut companies = Vec::with_capacity(rows.len());
        for (mut company, roles_json) in rows {
            company.roles = serde_json::from_str(&roles_json)?;
            companies.push(company);
        }
        Ok(companies)
    }

    async fn create_company(&self, draft: CompanyDraft) -> RepositoryResult<Company> {
        let conn = self.connect()?;
        let id = Uuid::new_v4().to_string();
        let roles_json = serde_json::to_string(&draft.roles)?;

        conn.execute(
            "INSERT INTO companies (id, name, sector, logo, description, roles)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                draft.name,
                draft.sector,
                draft.logo,
                draft.description,
                roles_json
            ],
        )?;

        Ok(Company {
            id,
            name: draft.name,
            sector: draft.sector,
            logo: draft.logo,
            description: draft.description,
            roles: draft.roles,
        })
    }

    async fn create_question(&self, question: Question) -> RepositoryResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO questions (id, company_id, company_name, domain, role, topic,
             difficulty, question, ideal_approach, asked_in_bits, frequency)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                question.id,
                question.company_id,
                question.company_name,
                question.domain,
                question.role,
                question.topic.as_str(),
                question.difficulty.as_str(),
                question.text,
                question.ideal_approach,
                question.asked_in_bits,
                question.frequency,
            ],
        )?;
        Ok(())
    }

    async fn create_resource(&self, resource: Resource) -> RepositoryResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO resources (id, title, url, description, category, source, duration)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                resource.id,
                resource.title,
                resource.url,
                resource.description,
                resource.category,
                resource.source,
                resource.duration,
            ],
        )?;
        Ok(())
    }

    async fn create_recommendation(
        &self,
        recommendation: Recommendation,
    ) -> RepositoryResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO recommendations (id, faculty_name, date, title, url, description,
             subject, goal, expected_learning, remarks, time_to_complete)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                recommendation.id,
                recommendation.faculty_name,
                recommendation.date,
                recommendation.title,
                recommendation.url,
                recommendation.description,
                recommendation.subject.as_str(),
                recommendation.goal,
                recommendation.expected_learning,
                recommendation.remarks,
                recommendation.time_to_complete,
            ],
        )?;
        Ok(())
    }

    async fn upsert_whitelist_entry(&self, entry: WhitelistEntry) -> RepositoryResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO user_roles (email, role, auth_provider, name, updated_at)
             VALUES (?1, ?2, ?3, ?4, datetime('now'))
             ON CONFLICT(email) DO UPDATE SET
                 role = excluded.role,
                 auth_provider = excluded.auth_provider,
                 name = excluded.name,
                 updated_at = excluded.updated_at",
            params![
                entry.email,
                entry.role.as_str(),
                entry.auth_provider.as_str(),
                entry.name,
            ],
        )?;
        Ok(())
    }

    async fn role_for_email(&self, email: &str) -> RepositoryResult<Option<UserRole>> {
        let conn = self.connect()?;
        let role: Option<String> = conn
            .query_row(
                "SELECT role FROM user_roles WHERE email = ?1",
                params![email],
                |row| row.get(0),
            )
            .optional()?;

        Ok(role.map(|r| UserRole::parse_lenient(&r)))
    }

    async fn insert_upload_batch(&self, batch: UploadBatch) -> RepositoryResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO upload_batch (batch_id, kind, file_name, total_rows,
             success_rows, failed_rows, uploaded_at, elapsed_ms)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                batch.batch_id,
                batch.kind.as_str(),
                batch.file_name,
                batch.total_rows as i64,
                batch.success_rows as i64,
                batch.failed_rows as i64,
                batch.uploaded_at.to_rfc3339(),
                batch.elapsed_ms,
            ],
        )?;
        Ok(())
    }

    async fn recent_upload_batches(&self, limit: usize) -> RepositoryResult<Vec<UploadBatch>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT batch_id, kind, file_name, total_rows, success_rows, failed_rows,
             uploaded_at, elapsed_ms
             FROM upload_batch ORDER BY uploaded_at DESC LIMIT ?1",
        )?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, i64>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, i64>(7)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut batches = Vec::with_capacity(rows.len());
        for (batch_id, kind, file_name, total, success, failed, uploaded_at, elapsed_ms) in rows {
            let kind = RecordKind::parse(&kind)
                .ok_or_else(|| RepositoryError::Decode(format!("unknown record kind: {}", kind)))?;
            let uploaded_at = DateTime::parse_from_rfc3339(&uploaded_at)
                .map_err(|e| RepositoryError::Decode(e.to_string()))?
                .with_timezone(&Utc);
            batches.push(UploadBatch {
                batch_id,
                kind,
                file_name,
                total_rows: total as usize,
                success_rows: success as usize,
                failed_rows: failed as usize,
                uploaded_at,
                elapsed_ms,
            });
        }
        Ok(batches)
    }

    async fn count_companies(&self) -> RepositoryResult<usize> {
        let conn = self.connect()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    async fn count_questions(&self) -> RepositoryResult<usize> {
        let conn = self.connect()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    async fn count_resources(&self) -> RepositoryResult<usize> {
        let conn = self.connect()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM resources", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    async fn count_recommendations(&self) -> RepositoryResult<usize> {
        let conn = self.connect()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM recommendations", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
