// ==========================================
// Placement Prep Portal - Upload layer
// ==========================================
// Bulk CSV ingestion pipeline, four cooperating stages:
// tokenizer -> header validator -> company resolver -> materializer.
// Data flows strictly forward; each stage is testable on its own.
// ==========================================

// Module declarations
pub mod bulk_uploader_impl;
pub mod bulk_uploader_trait;
pub mod company_resolver;
pub mod csv_parser;
pub mod error;
pub mod materializer;
pub mod progress;
pub mod schema;
pub mod template;

// Re-export core types
pub use bulk_uploader_impl::BulkUploaderImpl;
pub use bulk_uploader_trait::BulkUploader;
pub use company_resolver::{resolve_companies, CompanyResolution};
pub use csv_parser::{parse_csv, ParsedRow};
pub use error::{UploadError, UploadResult};
pub use progress::{NoopProgress, ProgressSink};
pub use schema::{expected_headers, min_fields, validate_headers, ColumnMap};
pub use template::{template_csv, template_file_name};
