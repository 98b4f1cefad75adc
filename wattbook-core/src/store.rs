//! Record store trait and SQLite implementation

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::migrations::Migrator;
use crate::types::Assessment;

/// Durable ordered mapping from assessment id to record.
///
/// Every read yields an independent snapshot and every write replaces the
/// whole value under that key; there is no partial-field update. A failed
/// write leaves the stored record exactly as it was.
pub trait RecordStore: Send + Sync {
    /// Point lookup; an absent key is `None`, never an error
    fn get(&self, id: &str) -> Result<Option<Assessment>, StoreError>;

    /// Insert if absent, else fully replace the existing value
    fn put(&self, assessment: &Assessment) -> Result<(), StoreError>;

    /// Remove and return the prior value if present
    fn delete(&self, id: &str) -> Result<Option<Assessment>, StoreError>;

    /// Full materialized snapshot in ascending id order
    fn values(&self) -> Result<Vec<Assessment>, StoreError>;
}

/// SQLite-backed record store
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open or create the database at path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init()?;
        info!(path = %path.as_ref().display(), "Opened assessment store");
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init()?;
        Ok(store)
    }

    /// Run migrations
    fn init(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        Migrator::new(&conn).migrate()
    }

    fn decode(raw: &str) -> Result<Assessment, StoreError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl RecordStore for SqliteRecordStore {
    fn get(&self, id: &str) -> Result<Option<Assessment>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let raw: Option<String> = conn
            .query_row("SELECT record FROM assessments WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()?;
        raw.as_deref().map(Self::decode).transpose()
    }

    fn put(&self, assessment: &Assessment) -> Result<(), StoreError> {
        let raw = serde_json::to_string(assessment)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO assessments (id, record) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET record = excluded.record",
            params![assessment.id, raw],
        )?;
        debug!(id = %assessment.id, "Stored assessment record");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<Option<Assessment>, StoreError> {
        // Read and remove under one lock hold so the returned value is the
        // exact record that was deleted.
        let conn = self.conn.lock().unwrap();
        let raw: Option<String> = conn
            .query_row("SELECT record FROM assessments WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        conn.execute("DELETE FROM assessments WHERE id = ?1", [id])?;
        debug!(id = %id, "Deleted assessment record");
        Ok(Some(Self::decode(&raw)?))
    }

    fn values(&self) -> Result<Vec<Assessment>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT record FROM assessments ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut values = Vec::new();
        for raw in rows {
            values.push(Self::decode(&raw?)?);
        }
        Ok(values)
    }
}
