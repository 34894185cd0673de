// ==========================================
// Placement Prep Portal - Bulk Uploader Trait
// ==========================================
// Main interface of the ingestion pipeline (no implementation here).
// ==========================================

use crate::domain::{RecordKind, UploadReport};
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// BulkUploader Trait
// ==========================================
// Implementor: BulkUploaderImpl
#[async_trait]
pub trait BulkUploader: Send + Sync {
    /// Run one bulk upload from a CSV file
    ///
    /// # Arguments
    /// - kind: record kind the file is expected to contain
    /// - file_path: CSV file path (.csv)
    ///
    /// # Returns
    /// The per-invocation UploadReport. This method is total: file
    /// and schema failures are folded into the report, row failures
    /// never abort the batch, and nothing escapes to the caller as a
    /// panic or error.
    ///
    /// # Pipeline phases
    /// 1. Read file text
    /// 2. Tokenize into rows
    /// 3. Header gate (short-circuits the whole batch on mismatch)
    /// 4. Company resolution (question files only; completes fully
    ///    before any row is materialized)
    /// 5. Row materialization + deferred record creation
    /// 6. Batch bookkeeping
    async fn upload<P: AsRef<Path> + Send>(
        &self,
        kind: RecordKind,
        file_path: P,
    ) -> UploadReport;

    /// Upload several files, one report per file
    ///
    /// Each file's upload is independent: a failing file does not
    /// affect the others, and resolver guarantees hold per
    /// invocation, not across them.
    async fn upload_many<P: AsRef<Path> + Send + Sync>(
        &self,
        files: Vec<(RecordKind, P)>,
    ) -> Vec<UploadReport>;
}
