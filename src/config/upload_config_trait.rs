// ==========================================
// Placement Prep Portal - Upload config trait
// ==========================================
// Read-only configuration the upload pipeline depends on.
// Implementors: ConfigManager (SQLite-backed), StaticUploadConfig
// ==========================================

// ==========================================
// UploadConfigReader Trait
// ==========================================
pub trait UploadConfigReader: Send + Sync {
    /// Per-company-creation timeout in the resolver phase (milliseconds)
    ///
    /// A creation call that outlives this bound counts as a creation
    /// failure for that company name; rows depending on the name fail
    /// individually instead of hanging the whole batch.
    fn resolver_timeout_ms(&self) -> u64;

    /// Advisory upload size ceiling (bytes)
    ///
    /// Documented to the user as the maximum file size. The pipeline
    /// logs a warning when an upload exceeds it but never rejects on
    /// size alone.
    fn max_file_size_bytes(&self) -> u64;
}
