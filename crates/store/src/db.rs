//! SQLite record database.

use std::path::Path;

use aufiles_engine::Record;
use rusqlite::{params, Connection};

use crate::error::StoreError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id          TEXT NOT NULL,
    friend_code TEXT NOT NULL,
    puid        TEXT NOT NULL UNIQUE
);
"#;

pub struct RecordDb {
    conn: Connection,
}

impl RecordDb {
    /// Open the database at `path`, creating the file and schema if needed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        let conn = Connection::open(path).map_err(backend)?;
        conn.execute_batch(SCHEMA).map_err(backend)?;
        Ok(Self { conn })
    }

    /// In-memory database (tests).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        conn.execute_batch(SCHEMA).map_err(backend)?;
        Ok(Self { conn })
    }

    /// All records, ordered by id ascending, tagged database-origin.
    pub fn select_all(&self) -> Result<Vec<Record>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, friend_code, puid FROM records ORDER BY id ASC")
            .map_err(backend)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Record::database(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(backend)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(backend)
    }

    /// Duplicate pre-check: is there already a row with this PUID?
    pub fn exists_by_puid(&self, puid: &str) -> Result<bool, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM records WHERE puid = ?1 LIMIT 1")
            .map_err(backend)?;
        stmt.exists([puid]).map_err(backend)
    }

    /// Insert one record, returning the stored row. A PUID collision is the
    /// distinct `Duplicate` outcome rather than a generic backend error.
    pub fn insert(
        &self,
        identifier: &str,
        friend_code: &str,
        puid: &str,
    ) -> Result<Record, StoreError> {
        self.conn
            .execute(
                "INSERT INTO records (id, friend_code, puid) VALUES (?1, ?2, ?3)",
                params![identifier, friend_code, puid],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::Duplicate
                } else {
                    StoreError::Backend(e.to_string())
                }
            })?;
        Ok(Record::database(identifier, friend_code, puid))
    }
}

fn backend(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aufiles_engine::Origin;

    #[test]
    fn insert_and_select_all_ordered_by_id() {
        let db = RecordDb::open_in_memory().unwrap();
        db.insert("zeta", "zeta#1111", "00000000000000000000000000000001").unwrap();
        db.insert("alpha", "alpha#2222", "00000000000000000000000000000002").unwrap();

        let all = db.select_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].identifier, "alpha");
        assert_eq!(all[1].identifier, "zeta");
        assert!(all.iter().all(|r| r.origin == Origin::Database));
    }

    #[test]
    fn exists_by_puid_pre_check() {
        let db = RecordDb::open_in_memory().unwrap();
        assert!(!db.exists_by_puid("00000000000000000000000000000001").unwrap());
        db.insert("a", "a#1111", "00000000000000000000000000000001").unwrap();
        assert!(db.exists_by_puid("00000000000000000000000000000001").unwrap());
    }

    #[test]
    fn duplicate_puid_is_a_distinct_outcome() {
        let db = RecordDb::open_in_memory().unwrap();
        db.insert("a", "a#1111", "00000000000000000000000000000001").unwrap();
        let err = db
            .insert("b", "b#2222", "00000000000000000000000000000001")
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
    }

    #[test]
    fn insert_returns_the_stored_row() {
        let db = RecordDb::open_in_memory().unwrap();
        let row = db
            .insert("pichipuk", "pichipuk#0001", "00023bde5dd04f3ba92427d9e59359a1")
            .unwrap();
        assert_eq!(row.identifier, "pichipuk");
        assert_eq!(row.origin, Origin::Database);
    }

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.db");
        let db = RecordDb::open(&path).unwrap();
        assert!(db.select_all().unwrap().is_empty());
        assert!(path.exists());
    }
}
