//! Durable queue of sales awaiting delivery.
//!
//! Records are only ever inserted and flipped from `pending` to `synced`;
//! nothing is deleted.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info, warn};

use super::record::{QueueRecord, QueueStatus};
use crate::error::PosError;
use crate::features::sale::SalePayload;
use crate::storage::Database;

const SELECT_COLUMNS: &str = "SELECT id, client_txn_id, payload, status, created_at FROM sales_queue";

/// `SQLite`-backed store of queued sales.
pub struct QueueStore {
    db: Database,
}

impl QueueStore {
    /// Open the store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, PosError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Persist a sale as a new pending record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn enqueue(&self, payload: &SalePayload) -> Result<QueueRecord, PosError> {
        let conn = self.db.connection();
        let created_at = Utc::now();
        let body = serde_json::to_string(payload)?;

        conn.execute(
            r"INSERT INTO sales_queue (client_txn_id, payload, status, created_at)
              VALUES (?1, ?2, ?3, ?4)",
            params![
                payload.client_txn_id(),
                body,
                QueueStatus::Pending.as_str(),
                created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| PosError::Database(format!("Failed to enqueue sale: {e}")))?;

        let record = QueueRecord {
            id: conn.last_insert_rowid(),
            client_txn_id: payload.client_txn_id().to_string(),
            payload: payload.clone(),
            status: QueueStatus::Pending,
            created_at,
        };

        info!(id = record.id, client_txn_id = %record.client_txn_id, "Queued sale");
        Ok(record)
    }

    /// All pending records, oldest first.
    ///
    /// Rows that cannot be decoded are logged and skipped; they stay pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_pending(&self) -> Result<Vec<QueueRecord>, PosError> {
        self.query(
            &format!("{SELECT_COLUMNS} WHERE status = ?1 ORDER BY id ASC"),
            &[&QueueStatus::Pending.as_str()],
        )
    }

    /// Flip a record to synced.
    ///
    /// Returns `true` if this call performed the transition. Unknown ids and
    /// already-synced records are left alone and return `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_synced(&self, id: i64) -> Result<bool, PosError> {
        let conn = self.db.connection();

        // Single conditional UPDATE so two sweeps cannot both claim a row.
        let rows = conn
            .execute(
                "UPDATE sales_queue SET status = ?1 WHERE id = ?2 AND status = ?3",
                params![
                    QueueStatus::Synced.as_str(),
                    id,
                    QueueStatus::Pending.as_str()
                ],
            )
            .map_err(|e| PosError::Database(format!("Failed to mark sale synced: {e}")))?;

        if rows == 0 {
            debug!(id, "mark_synced changed nothing");
        }
        Ok(rows > 0)
    }

    /// Every record, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all(&self) -> Result<Vec<QueueRecord>, PosError> {
        self.query(
            &format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"),
            &[],
        )
    }

    /// Records with the given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_by_status(&self, status: QueueStatus) -> Result<Vec<QueueRecord>, PosError> {
        self.query(
            &format!("{SELECT_COLUMNS} WHERE status = ?1 ORDER BY created_at DESC, id DESC"),
            &[&status.as_str()],
        )
    }

    /// Get a specific record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row cannot be
    /// decoded.
    pub fn get(&self, id: i64) -> Result<Option<QueueRecord>, PosError> {
        self.db
            .connection()
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id], StoredRow::read)
            .optional()
            .map_err(|e| PosError::Database(format!("Failed to query sale {id}: {e}")))?
            .map(StoredRow::decode)
            .transpose()
    }

    /// Get queue statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn stats(&self) -> Result<QueueStats, PosError> {
        let conn = self.db.connection();

        let count = |status: QueueStatus| -> Result<i64, PosError> {
            conn.query_row(
                "SELECT COUNT(*) FROM sales_queue WHERE status = ?1",
                [status.as_str()],
                |row| row.get(0),
            )
            .map_err(|e| PosError::Database(format!("Failed to count {status} sales: {e}")))
        };

        let pending = count(QueueStatus::Pending)?;
        let synced = count(QueueStatus::Synced)?;

        let oldest_pending: Option<String> = conn
            .query_row(
                "SELECT created_at FROM sales_queue WHERE status = ?1 ORDER BY id ASC LIMIT 1",
                [QueueStatus::Pending.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| PosError::Database(format!("Failed to get oldest pending: {e}")))?;

        let oldest_pending = oldest_pending
            .map(|s| parse_created_at(&s))
            .transpose()
            .map_err(|e| PosError::Database(format!("Failed to read oldest pending: {e}")))?;

        Ok(QueueStats {
            pending,
            synced,
            oldest_pending,
        })
    }

    fn query(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<QueueRecord>, PosError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| PosError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, StoredRow::read)
            .map_err(|e| PosError::Database(format!("Failed to query sales queue: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            let row =
                row.map_err(|e| PosError::Database(format!("Failed to read queued sale: {e}")))?;
            let id = row.id;
            match row.decode() {
                Ok(record) => records.push(record),
                Err(e) => warn!(id, error = %e, "Skipping undecodable queued sale"),
            }
        }
        Ok(records)
    }
}

/// Queue statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStats {
    pub pending: i64,
    pub synced: i64,
    /// Creation time of the oldest pending record.
    pub oldest_pending: Option<DateTime<Utc>>,
}

/// A queue row as stored, before its columns are interpreted.
struct StoredRow {
    id: i64,
    client_txn_id: String,
    payload: String,
    status: String,
    created_at: String,
}

impl StoredRow {
    fn read(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            client_txn_id: row.get(1)?,
            payload: row.get(2)?,
            status: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn decode(self) -> Result<QueueRecord, PosError> {
        let id = self.id;

        let payload: SalePayload =
            serde_json::from_str(&self.payload).map_err(|e| invalid(id, "payload", e))?;
        let status = self
            .status
            .parse::<QueueStatus>()
            .map_err(|e| invalid(id, "status", e))?;
        let created_at =
            parse_created_at(&self.created_at).map_err(|e| invalid(id, "created_at", e))?;

        Ok(QueueRecord {
            id,
            client_txn_id: self.client_txn_id,
            payload,
            status,
            created_at,
        })
    }
}

fn invalid(id: i64, column: &str, err: impl std::fmt::Display) -> PosError {
    PosError::Database(format!("Queued sale {id} has an invalid {column}: {err}"))
}

fn parse_created_at(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}
