//! Key-value preference stores.

use std::collections::HashMap;
use std::path::Path;

use parking_lot::{Mutex, RwLock};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

/// String key-value storage that outlives a page session.
pub trait PreferenceStore: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Replace the value of `key` with `apply(current)` as one atomic step
    /// and return the stored value.
    fn update(&self, key: &str, apply: &dyn Fn(Option<&str>) -> String) -> Result<String>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn update(&self, key: &str, apply: &dyn Fn(Option<&str>) -> String) -> Result<String> {
        let mut values = self.values.write();
        let next = apply(values.get(key).map(String::as_str));
        values.insert(key.to_string(), next.clone());
        Ok(next)
    }
}

/// SQLite-backed store, one row per key.
#[derive(Debug)]
pub struct SqlitePreferenceStore {
    conn: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Could not create {}: {}", parent.display(), e);
                }
            }
        }
        Self::with_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        log::debug!("SqlitePreferenceStore::set: {}={}", key, value);
        Ok(())
    }

    fn update(&self, key: &str, apply: &dyn Fn(Option<&str>) -> String) -> Result<String> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let current: Option<String> = tx
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        let next = apply(current.as_deref());
        tx.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, next],
        )?;
        tx.commit()?;
        log::debug!("SqlitePreferenceStore::update: {}={}", key, next);
        Ok(next)
    }
}
