//! SQLite access for the operational store and the warehouse.

mod schema;
mod source;
mod warehouse;
mod seed;

pub use schema::*;
pub use warehouse::*;

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database file not found: {}", .0.display())]
    MissingDatabase(PathBuf),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating the file if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open a database that must already exist.
    pub fn open_existing<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DbError::MissingDatabase(path.to_path_buf()));
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        Ok(Self { conn })
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Drop and recreate the operational tables.
    pub fn create_oltp_schema(&self) -> DbResult<()> {
        self.conn.execute_batch(OLTP_SCHEMA)?;
        Ok(())
    }

    /// Drop and recreate the warehouse tables.
    pub fn reset_warehouse_schema(&self) -> DbResult<()> {
        self.conn.execute_batch(WAREHOUSE_SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begin a transaction.
    pub fn transaction(&mut self) -> DbResult<rusqlite::Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Count rows in a table, for inspecting either store after a run.
    ///
    /// `table` is interpolated into the SQL; pass only known table names.
    pub fn count_rows(&self, table: &str) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM [{}]", table);
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_open_existing_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let result = Database::open_existing(&path);
        assert!(matches!(result, Err(DbError::MissingDatabase(p)) if p == path));
        assert!(!path.exists(), "open_existing must not create the file");
    }

    #[test]
    fn test_open_existing_after_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oltp.db");

        Database::open(&path).unwrap().create_oltp_schema().unwrap();

        let db = Database::open_existing(&path).unwrap();
        assert_eq!(db.count_rows("patient").unwrap(), 0);
    }

    #[test]
    fn test_count_rows_missing_table() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(db.count_rows("dim_patient"), Err(DbError::Sqlite(_))));
    }
}
