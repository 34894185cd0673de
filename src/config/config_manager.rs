// ==========================================
// Placement Prep Portal - Config manager
// ==========================================
// Key/value configuration stored in the app_config table, with
// crate-level defaults for missing keys.
// ==========================================

use crate::config::upload_config_trait::UploadConfigReader;
use crate::db;
use rusqlite::{params, OptionalExtension};
use tracing::warn;

// ===== Defaults =====

/// Default resolver per-creation timeout (10s)
pub const DEFAULT_RESOLVER_TIMEOUT_MS: u64 = 10_000;

/// Default advisory upload ceiling (5MB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

// ===== Config keys =====

pub const KEY_RESOLVER_TIMEOUT_MS: &str = "upload.resolver_timeout_ms";
pub const KEY_MAX_FILE_SIZE_BYTES: &str = "upload.max_file_size_bytes";

// ==========================================
// ConfigManager - SQLite-backed configuration
// ==========================================
pub struct ConfigManager {
    db_path: String,
}

impl ConfigManager {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Read a u64 config value, falling back to `default` when the key
    /// is missing, unreadable, or not a number
    fn get_u64(&self, key: &str, default: u64) -> u64 {
        let value = db::open_connection(&self.db_path)
            .and_then(|conn| {
                conn.query_row(
                    "SELECT value FROM app_config WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()
            })
            .unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "config read failed, using default");
                None
            });

        match value {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(key = %key, value = %raw, "config value is not a number, using default");
                default
            }),
            None => default,
        }
    }
}

impl UploadConfigReader for ConfigManager {
    fn resolver_timeout_ms(&self) -> u64 {
        self.get_u64(KEY_RESOLVER_TIMEOUT_MS, DEFAULT_RESOLVER_TIMEOUT_MS)
    }

    fn max_file_size_bytes(&self) -> u64 {
        self.get_u64(KEY_MAX_FILE_SIZE_BYTES, DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

// ==========================================
// StaticUploadConfig - fixed values (tests, embedding callers)
// ==========================================
#[derive(Debug, Clone)]
pub struct StaticUploadConfig {
    pub resolver_timeout_ms: u64,
    pub max_file_size_bytes: u64,
}

impl Default for StaticUploadConfig {
    fn default() -> Self {
        Self {
            resolver_timeout_ms: DEFAULT_RESOLVER_TIMEOUT_MS,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl UploadConfigReader for StaticUploadConfig {
    fn resolver_timeout_ms(&self) -> u64 {
        self.resolver_timeout_ms
    }

    fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::NamedTempFile;

    fn seeded_db() -> (NamedTempFile, String) {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();
        let conn = Connection::open(&path).unwrap();
        db::init_schema(&conn).unwrap();
        (temp, path)
    }

    #[test]
    fn test_missing_key_uses_default() {
        let (_temp, path) = seeded_db();
        let config = ConfigManager::new(&path);
        assert_eq!(config.resolver_timeout_ms(), DEFAULT_RESOLVER_TIMEOUT_MS);
    }

    #[test]
    fn test_configured_key_overrides_default() {
        let (_temp, path) = seeded_db();
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO app_config (key, value) VALUES (?1, ?2)",
            params![KEY_RESOLVER_TIMEOUT_MS, "2500"],
        )
        .unwrap();

        let config = ConfigManager::new(&path);
        assert_eq!(config.resolver_timeout_ms(), 2500);
    }

    #[test]
    fn test_garbage_value_uses_default() {
        let (_temp, path) = seeded_db();
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO app_config (key, value) VALUES (?1, ?2)",
            params![KEY_MAX_FILE_SIZE_BYTES, "five megabytes"],
        )
        .unwrap();

        let config = ConfigManager::new(&path);
        assert_eq!(config.max_file_size_bytes(), DEFAULT_MAX_FILE_SIZE_BYTES);
    }
}
