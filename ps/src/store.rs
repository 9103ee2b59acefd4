//! Core PreferenceStore implementation

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the persistence layer
///
/// Storage failures are fatal to the calling operation; there is no
/// retry at this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create store directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// One user's trip preferences - the last submitted form, nothing more
///
/// All fields are free text; the only validation anywhere is that a
/// submission has every field non-empty, and that happens in the
/// session layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// City being visited
    pub city: String,
    /// Free-text time range, e.g. "10am - 4pm"
    pub available_time: String,
    /// Free-text budget for the day
    pub budget: String,
    /// Comma-ish list of interests
    pub interests: String,
    /// Where the trip starts (hotel, first attraction)
    pub starting_point: String,
}

/// SQLite-backed preference store
///
/// One row per user id. `put` is a full-record upsert: inserts when
/// absent, overwrites every column when present.
pub struct PreferenceStore {
    conn: Connection,
}

impl PreferenceStore {
    /// Open (or create) the store at the given database path
    ///
    /// Creates parent directories as needed and idempotently ensures
    /// the schema exists. Safe to call against an already-initialized
    /// database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        debug!(path = %path.display(), "Opened preference store");
        Ok(store)
    }

    /// Open an in-memory store (tests and one-off tooling)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                user_id TEXT PRIMARY KEY,
                city TEXT,
                available_time TEXT,
                budget TEXT,
                interests TEXT,
                starting_point TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Fetch the stored record for a user id, or `None` if never seen
    pub fn get(&self, user_id: &str) -> Result<Option<PreferenceRecord>, StoreError> {
        debug!(user_id, "PreferenceStore::get");
        let record = self
            .conn
            .query_row(
                "SELECT city, available_time, budget, interests, starting_point
                 FROM preferences WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok(PreferenceRecord {
                        city: row.get(0)?,
                        available_time: row.get(1)?,
                        budget: row.get(2)?,
                        interests: row.get(3)?,
                        starting_point: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Upsert the record for a user id
    ///
    /// A single REPLACE statement, so the overwrite is atomic with
    /// respect to this connection. Every column is written; there is
    /// no partial update.
    pub fn put(&self, user_id: &str, record: &PreferenceRecord) -> Result<(), StoreError> {
        self.conn.execute(
            "REPLACE INTO preferences (user_id, city, available_time, budget, interests, starting_point)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user_id,
                record.city,
                record.available_time,
                record.budget,
                record.interests,
                record.starting_point,
            ],
        )?;
        info!(user_id, city = %record.city, "Saved preferences");
        Ok(())
    }

    /// List all stored records, ordered by user id
    pub fn list(&self) -> Result<Vec<(String, PreferenceRecord)>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, city, available_time, budget, interests, starting_point
             FROM preferences ORDER BY user_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                PreferenceRecord {
                    city: row.get(1)?,
                    available_time: row.get(2)?,
                    budget: row.get(3)?,
                    interests: row.get(4)?,
                    starting_point: row.get(5)?,
                },
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Delete a user's record; returns whether a row existed
    ///
    /// Maintenance operation for the CLI. The interactive session
    /// never deletes.
    pub fn delete(&self, user_id: &str) -> Result<bool, StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM preferences WHERE user_id = ?1", params![user_id])?;
        if changed > 0 {
            info!(user_id, "Deleted preferences");
        }
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(city: &str) -> PreferenceRecord {
        PreferenceRecord {
            city: city.to_string(),
            available_time: "9am-5pm".to_string(),
            budget: "$100".to_string(),
            interests: "food, art".to_string(),
            starting_point: "hotel".to_string(),
        }
    }

    #[test]
    fn test_get_unknown_user_is_none() {
        let store = PreferenceStore::open_in_memory().unwrap();
        assert_eq!(store.get("never-seen").unwrap(), None);
    }

    #[test]
    fn test_put_get_round_trip() {
        let store = PreferenceStore::open_in_memory().unwrap();
        let rec = record("Paris");
        store.put("u1", &rec).unwrap();

        let fetched = store.get("u1").unwrap().expect("record should exist");
        assert_eq!(fetched, rec);
    }

    #[test]
    fn test_put_fully_overwrites() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.put("u1", &record("Paris")).unwrap();

        let second = PreferenceRecord {
            city: "Tokyo".to_string(),
            available_time: "all day".to_string(),
            budget: "$500".to_string(),
            interests: "temples".to_string(),
            starting_point: "station".to_string(),
        };
        store.put("u1", &second).unwrap();

        let fetched = store.get("u1").unwrap().unwrap();
        assert_eq!(fetched, second);
    }

    #[test]
    fn test_records_are_per_user() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.put("u1", &record("Paris")).unwrap();
        store.put("u2", &record("Rome")).unwrap();

        assert_eq!(store.get("u1").unwrap().unwrap().city, "Paris");
        assert_eq!(store.get("u2").unwrap().unwrap().city, "Rome");
    }

    #[test]
    fn test_open_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("prefs.db");

        {
            let store = PreferenceStore::open(&db_path).unwrap();
            store.put("u1", &record("Paris")).unwrap();
        }

        // Re-opening must not clobber existing rows
        let store = PreferenceStore::open(&db_path).unwrap();
        assert_eq!(store.get("u1").unwrap().unwrap().city, "Paris");
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("nested").join("deep").join("prefs.db");

        let store = PreferenceStore::open(&db_path).unwrap();
        store.put("u1", &record("Paris")).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_list_and_delete() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.put("b", &record("Rome")).unwrap();
        store.put("a", &record("Paris")).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, "a");
        assert_eq!(all[1].0, "b");

        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
