// ==========================================
// Placement Prep Portal - SQLite connection setup
// ==========================================
// Goals:
// - Unify PRAGMA behavior for every Connection::open, so foreign keys
//   are never enabled in one module and silently off in another
// - Unify busy_timeout to reduce sporadic busy errors on concurrent writes
// - Own the schema bootstrap for the content tables
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMA set to a connection
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied to every connection this crate opens.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Content schema bootstrap
///
/// Creates every table the portal backend relies on. All statements are
/// idempotent (CREATE TABLE IF NOT EXISTS), so this can run on every start.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL UNIQUE,
            sector      TEXT NOT NULL,
            logo        TEXT NOT NULL,
            description TEXT NOT NULL,
            roles       TEXT NOT NULL DEFAULT '[]',
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS questions (
            id             TEXT PRIMARY KEY,
            company_id     TEXT NOT NULL REFERENCES companies(id),
            company_name   TEXT NOT NULL,
            domain         TEXT NOT NULL,
            role           TEXT NOT NULL,
            topic          TEXT NOT NULL,
            difficulty     TEXT NOT NULL,
            question       TEXT NOT NULL,
            ideal_approach TEXT NOT NULL DEFAULT '',
            asked_in_bits  INTEGER NOT NULL DEFAULT 0,
            frequency      INTEGER NOT NULL DEFAULT 1,
            created_at     TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS resources (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            url         TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category    TEXT NOT NULL,
            source      TEXT NOT NULL,
            duration    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS recommendations (
            id                TEXT PRIMARY KEY,
            faculty_name      TEXT NOT NULL,
            date              TEXT NOT NULL,
            title             TEXT NOT NULL,
            url               TEXT,
            description       TEXT NOT NULL DEFAULT '',
            subject           TEXT NOT NULL,
            goal              TEXT NOT NULL DEFAULT '',
            expected_learning TEXT NOT NULL DEFAULT '',
            remarks           TEXT,
            time_to_complete  TEXT,
            created_at        TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS user_roles (
            email         TEXT PRIMARY KEY,
            role          TEXT NOT NULL,
            auth_provider TEXT NOT NULL,
            name          TEXT,
            updated_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS upload_batch (
            batch_id     TEXT PRIMARY KEY,
            kind         TEXT NOT NULL,
            file_name    TEXT,
            total_rows   INTEGER NOT NULL,
            success_rows INTEGER NOT NULL,
            failed_rows  INTEGER NOT NULL,
            uploaded_at  TEXT NOT NULL,
            elapsed_ms   INTEGER
        );

        CREATE TABLE IF NOT EXISTS app_config (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
}
