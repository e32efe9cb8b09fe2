use rusqlite::{params, OptionalExtension};

use crate::db::Database;
use crate::errors::ServerError;
use crate::storage::KeyValueStore;

/// Persistent store over the `kv_store` table.
#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("kv get failed: {e}")))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv_store (key, value)
                VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
                params![key, value],
            )
            .map_err(|e| ServerError::DbError(format!("kv set failed: {e}")))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                .map_err(|e| ServerError::DbError(format!("kv remove failed: {e}")))?;
            Ok(())
        })
    }

    /// `BEGIN IMMEDIATE` takes the write lock up front, so a second worker
    /// waits (busy timeout) instead of reading a list that is about to change.
    fn atomically<T, F>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce() -> Result<T, ServerError>,
    {
        self.exec("BEGIN IMMEDIATE")?;

        let result = f().and_then(|value| self.exec("COMMIT").map(|_| value));
        if result.is_err() {
            if let Err(e) = self.exec("ROLLBACK") {
                tracing::warn!(error = %e, "kv rollback failed");
            }
        }
        result
    }
}

impl SqliteStore {
    fn exec(&self, sql: &str) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute_batch(sql)
                .map_err(|e| ServerError::DbError(format!("{sql} failed: {e}")))
        })
    }
}
