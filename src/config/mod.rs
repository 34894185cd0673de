// ==========================================
// Placement Prep Portal - Config layer
// ==========================================

// Module declarations
pub mod config_manager;
pub mod upload_config_trait;

// Re-export core types
pub use config_manager::{
    ConfigManager, StaticUploadConfig, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_RESOLVER_TIMEOUT_MS,
};
pub use upload_config_trait::UploadConfigReader;
