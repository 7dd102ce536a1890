//! SQLite storage bootstrap and schema setup entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the task store.
//! - Create the task schema on first open.
//!
//! # Invariants
//! - Layout version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write task data before the schema exists.

use thiserror::Error;

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to reach, read or write the backing database.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    #[error("invalid persisted task data: {0}")]
    InvalidData(String),
}
