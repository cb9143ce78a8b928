//! Database migrations for pos-client.
//!
//! Each migration upgrades the schema by one version. Migrations are run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::PosError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, PosError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PosError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), PosError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PosError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), PosError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), PosError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(PosError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the offline sales queue.
///
/// `client_txn_id` is deliberately not UNIQUE; collisions are the caller's
/// concern.
fn migrate_v1(conn: &Connection) -> Result<(), PosError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS sales_queue (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_txn_id TEXT NOT NULL,
            payload TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sales_queue_status
        ON sales_queue(status);
        ",
    )
    .map_err(|e| PosError::Database(format!("Migration v1 failed: {e}")))
}
