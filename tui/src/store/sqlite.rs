use std::path::Path;

use blitz_core::{KeyValueStore, StoreError, StoreResult};
use rusqlite::{params, Connection};

use crate::store::log_error;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(wrap)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );",
        )
        .map_err(wrap)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1 LIMIT 1")
            .map_err(wrap)?;
        let mut rows = stmt.query(params![key]).map_err(wrap)?;
        match rows.next().map_err(wrap)? {
            Some(row) => Ok(Some(row.get(0).map_err(wrap)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(wrap)?;
        Ok(())
    }
}

fn wrap(err: rusqlite::Error) -> StoreError {
    log_error(&err.to_string());
    StoreError::Backend(err.to_string())
}
