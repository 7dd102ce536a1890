//! Task table bootstrap.
//!
//! The schema is a single idempotent batch. `PRAGMA user_version` records
//! which layout the file holds so an older binary refuses a newer file
//! instead of misreading it.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;
use std::cmp::Ordering;

/// Layout version written by this binary.
pub const SCHEMA_VERSION: u32 = 1;

const TASKS_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `tasks` table when absent. Safe to call on every open.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer layout.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    let found = stored_version(conn)?;
    match found.cmp(&SCHEMA_VERSION) {
        Ordering::Greater => Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: SCHEMA_VERSION,
        }),
        Ordering::Equal => Ok(()),
        // Version 0 is a fresh file or a table created by an unversioned build.
        Ordering::Less => {
            conn.execute_batch(TASKS_SCHEMA_SQL)?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            Ok(())
        }
    }
}

/// Reads the layout version recorded in the database file.
pub fn stored_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
    Ok(version)
}
