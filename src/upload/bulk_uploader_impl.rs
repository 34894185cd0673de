// ==========================================
// Placement Prep Portal - Bulk uploader implementation
// ==========================================
// Orchestrates the ingestion pipeline, one invocation per uploaded
// file: read -> tokenize -> header gate -> resolve -> materialize
// -> bookkeeping. Data flows strictly forward between phases.
//
// Ordering guarantees (per invocation):
// - company resolution for all distinct names completes before any
//   row materialization begins
// - rows are materialized in file order; record creations are
//   dispatched during the loop and drained together at the end, so
//   the success/failure counters are fixed at materialization time
//   and persistence completion order is not guaranteed
// ==========================================

use crate::config::UploadConfigReader;
use crate::domain::{RecordKind, UploadBatch, UploadReport};
use crate::repository::{ContentRepository, RepositoryResult};
use crate::upload::bulk_uploader_trait::BulkUploader;
use crate::upload::company_resolver::resolve_companies;
use crate::upload::csv_parser::{parse_csv, read_file_content};
use crate::upload::materializer::{
    materialize_question, materialize_recommendation, materialize_resource,
    materialize_whitelist,
};
use crate::upload::progress::{
    NoopProgress, ProgressSink, PROGRESS_COMPLETE, PROGRESS_PARSED, PROGRESS_READ,
    PROGRESS_RESOLVED, PROGRESS_VALIDATED,
};
use crate::upload::schema::{expected_headers, min_fields, ColumnMap};
use chrono::{Local, Utc};
use futures::future::{join_all, BoxFuture};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// BulkUploaderImpl
// ==========================================
pub struct BulkUploaderImpl<R, C>
where
    R: ContentRepository,
    C: UploadConfigReader,
{
    // Data access
    repo: R,

    // Runtime configuration
    config: C,

    // Progress indicator callback
    progress: Box<dyn ProgressSink>,
}

impl<R, C> BulkUploaderImpl<R, C>
where
    R: ContentRepository,
    C: UploadConfigReader,
{
    pub fn new(repo: R, config: C) -> Self {
        Self {
            repo,
            config,
            progress: Box::new(NoopProgress),
        }
    }

    /// Attach a progress sink for the caller's progress indicator
    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Borrow the underlying repository
    pub fn repo(&self) -> &R {
        &self.repo
    }
}

#[async_trait::async_trait]
impl<R, C> BulkUploader for BulkUploaderImpl<R, C>
where
    R: ContentRepository,
    C: UploadConfigReader,
{
    #[instrument(skip(self, file_path))]
    async fn upload<P: AsRef<Path> + Send>(
        &self,
        kind: RecordKind,
        file_path: P,
    ) -> UploadReport {
        let started = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        let file_path = file_path.as_ref();
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from);

        info!(batch_id = %batch_id, file = %file_path.display(), "starting bulk upload");

        // === Phase 1: read file ===
        let text = match read_file_content(file_path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(batch_id = %batch_id, error = %e, "file read failed");
                return UploadReport::file_failure();
            }
        };

        // Advisory ceiling only; documented to the user, never enforced
        let max_bytes = self.config.max_file_size_bytes();
        if text.len() as u64 > max_bytes {
            warn!(
                batch_id = %batch_id,
                size = text.len(),
                max = max_bytes,
                "upload exceeds the advisory size ceiling"
            );
        }
        self.progress.progress(PROGRESS_READ);

        // === Phase 2: tokenize ===
        let rows = parse_csv(&text);
        self.progress.progress(PROGRESS_PARSED);

        if rows.len() < 2 {
            return UploadReport {
                success: 0,
                failed: 0,
                errors: vec!["File is empty or missing header row".to_string()],
            };
        }
        let data_rows = &rows[1..];

        // === Phase 3: header gate ===
        let columns = match ColumnMap::build(&rows[0], kind) {
            Some(columns) => columns,
            None => {
                let expected = expected_headers(kind).join(", ");
                warn!(batch_id = %batch_id, "header validation failed");
                return UploadReport {
                    success: 0,
                    failed: data_rows.len(),
                    errors: vec![format!(
                        "Invalid CSV Format. Expected headers: {}",
                        expected
                    )],
                };
            }
        };
        self.progress.progress(PROGRESS_VALIDATED);

        let mut report = UploadReport::new();

        // === Phase 4: company resolution (questions only) ===
        // Must complete in full before any materialization: the row
        // loop is a plain lookup into the finished map.
        let resolution = if kind == RecordKind::Question {
            let known = match self.repo.list_companies().await {
                Ok(known) => known,
                Err(e) => {
                    warn!(batch_id = %batch_id, error = %e, "loading known companies failed");
                    return UploadReport {
                        success: 0,
                        failed: data_rows.len(),
                        errors: vec![format!("Failed to load existing companies: {}", e)],
                    };
                }
            };

            let timeout = Duration::from_millis(self.config.resolver_timeout_ms());
            let resolution =
                resolve_companies(&self.repo, &known, data_rows, &columns, timeout).await;
            report.errors.extend(resolution.errors.iter().cloned());
            debug!(
                batch_id = %batch_id,
                resolved = resolution.resolved.len(),
                created = resolution.created,
                failed_names = resolution.errors.len(),
                "company resolution finished"
            );
            Some(resolution)
        } else {
            None
        };
        self.progress.progress(PROGRESS_RESOLVED);

        // === Phase 5: materialize rows ===
        let empty_map = HashMap::new();
        let resolved = resolution
            .as_ref()
            .map(|r| &r.resolved)
            .unwrap_or(&empty_map);
        let today = Local::now().date_naive();
        let min = min_fields(kind);

        // Creations are dispatched here and drained after the loop;
        // counters are fixed at materialization time.
        let mut pending: Vec<BoxFuture<'_, RepositoryResult<()>>> = Vec::new();

        for (index, row) in data_rows.iter().enumerate() {
            // Line numbers are 1-based counting the header as line 1
            let line = index + 2;

            // Entirely empty rows are skipped, not counted as failures
            if row.iter().all(|field| field.is_empty()) {
                continue;
            }

            if row.len() < min {
                report.push_row_error(
                    line,
                    format!(
                        "Not enough fields (found {}, expected min {}).",
                        row.len(),
                        min
                    ),
                );
                continue;
            }

            match kind {
                RecordKind::Question => match materialize_question(row, &columns, resolved) {
                    Ok(question) => {
                        pending.push(self.repo.create_question(question));
                        report.success += 1;
                    }
                    Err(message) => report.push_row_error(line, message),
                },
                RecordKind::Resource => match materialize_resource(row, &columns) {
                    Ok(resource) => {
                        pending.push(self.repo.create_resource(resource));
                        report.success += 1;
                    }
                    Err(message) => report.push_row_error(line, message),
                },
                RecordKind::Recommendation => {
                    match materialize_recommendation(row, &columns, today) {
                        Ok(recommendation) => {
                            pending.push(self.repo.create_recommendation(recommendation));
                            report.success += 1;
                        }
                        Err(message) => report.push_row_error(line, message),
                    }
                }
                RecordKind::Whitelist => match materialize_whitelist(row, &columns) {
                    Ok(entry) => {
                        pending.push(self.repo.upsert_whitelist_entry(entry));
                        report.success += 1;
                    }
                    Err(message) => report.push_row_error(line, message),
                },
            }
        }

        // Drain deferred creations. Persistence failures here are
        // logged but do not reopen the counters.
        for result in join_all(pending).await {
            if let Err(e) = result {
                warn!(batch_id = %batch_id, error = %e, "record creation failed");
            }
        }

        // === Phase 6: batch bookkeeping ===
        let elapsed_ms = started.elapsed().as_millis() as i64;
        let batch = UploadBatch {
            batch_id: batch_id.clone(),
            kind,
            file_name,
            total_rows: rows.len(),
            success_rows: report.success,
            failed_rows: report.failed,
            uploaded_at: Utc::now(),
            elapsed_ms,
        };
        if let Err(e) = self.repo.insert_upload_batch(batch).await {
            warn!(batch_id = %batch_id, error = %e, "upload batch bookkeeping failed");
        }
        self.progress.progress(PROGRESS_COMPLETE);

        info!(
            batch_id = %batch_id,
            success = report.success,
            failed = report.failed,
            elapsed_ms = elapsed_ms,
            "bulk upload finished"
        );

        report
    }

    async fn upload_many<P: AsRef<Path> + Send + Sync>(
        &self,
        files: Vec<(RecordKind, P)>,
    ) -> Vec<UploadReport> {
        info!(count = files.len(), "starting multi-file upload");

        let tasks = files.iter().map(|(kind, path)| self.upload(*kind, path));
        let reports = join_all(tasks).await;

        info!(
            total = reports.len(),
            clean = reports.iter().filter(|r| r.failed == 0).count(),
            "multi-file upload finished"
        );
        reports
    }
}
