//! Durable table storage.
//!
//! # Responsibility
//! - Define the wholesale load/save contract the record store persists
//!   through.
//! - Keep backend details (SQLite, JSON snapshot) out of table and service
//!   code.
//!
//! # Invariants
//! - `load` after `save` reproduces the table exactly: all four fields and
//!   record order.
//! - A missing storage location loads as an empty table, never as an error.

use crate::db::DbError;
use crate::table::EmployeeTable;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod json;
mod sqlite;

pub use json::JsonTableStore;
pub use sqlite::SqliteTableStore;

/// Fixed column header, identical across all records and backends.
pub const COLUMNS: [&str; 4] = ["Employee ID", "Name", "Position", "Salary"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage backend errors.
///
/// All variants leave the in-memory table untouched; a malformed file is
/// reported once and never retried.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Io { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "storage i/o failed for `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed storage file: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored table: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Pluggable storage strategy: one durable mirror of the whole table.
///
/// Implementations replace prior contents wholesale on `save`; there is no
/// partial write visible to a subsequent `load` in the single-process case.
pub trait TableStore {
    /// Reads the full table from durable storage.
    fn load(&self) -> StoreResult<EmployeeTable>;

    /// Writes the full table to durable storage, replacing prior contents.
    fn save(&mut self, table: &EmployeeTable) -> StoreResult<()>;
}
