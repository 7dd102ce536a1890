//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the CRUD primitives over canonical `tasks` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate caller input before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing order is decided in Rust by `Task::listing_order`, not by
//!   backend-specific null ordering.

use crate::db::DbError;
use crate::model::task::{
    parse_iso_date, validate_title, Task, TaskId, TaskValidationError, DUE_DATE_FORMAT,
};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use thiserror::Error;

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    due_date,
    done
FROM tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by task persistence and query operations.
///
/// `Validation` is caller input; `Storage` is anything the backing database
/// failed to do, including corrupt rows.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(#[from] TaskValidationError),
    #[error("{0}")]
    Storage(#[from] DbError),
}

impl RepoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Input for creating a task. The id is assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub due_date: Option<NaiveDate>,
}

/// Query options for listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    pub include_done: bool,
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    fn create_task(&self, task: &NewTask<'_>) -> RepoResult<Task>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    fn mark_task_done(&self, id: TaskId) -> RepoResult<bool>;
    fn delete_task(&self, id: TaskId) -> RepoResult<bool>;
    fn delete_done_tasks(&self) -> RepoResult<usize>;
}

/// SQLite-backed task repository.
#[derive(Debug)]
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &NewTask<'_>) -> RepoResult<Task> {
        validate_title(task.title)?;

        self.conn.execute(
            "INSERT INTO tasks (
                title,
                description,
                due_date,
                done
            ) VALUES (?1, ?2, ?3, 0);",
            params![
                task.title,
                task.description,
                task.due_date.map(format_due_date),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Task::new(id, task.title, task.description, task.due_date)?)
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = TASK_SELECT_SQL.to_string();
        if !query.include_done {
            sql.push_str(" WHERE done = 0");
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        tasks.sort_by(Task::listing_order);
        Ok(tasks)
    }

    fn mark_task_done(&self, id: TaskId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("UPDATE tasks SET done = 1 WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn delete_done_tasks(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM tasks WHERE done = 1;", [])?;
        Ok(removed)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id: TaskId = row.get("id")?;

    let due_date = match row.get::<_, Option<String>>("due_date")? {
        Some(value) => Some(parse_iso_date(&value).ok_or_else(|| {
            DbError::InvalidData(format!(
                "invalid due date `{value}` in tasks.due_date (id={id})"
            ))
        })?),
        None => None,
    };

    let done = match row.get::<_, Option<i64>>("done")? {
        None | Some(0) => false,
        Some(1) => true,
        Some(other) => {
            return Err(DbError::InvalidData(format!(
                "invalid done value `{other}` in tasks.done (id={id})"
            ))
            .into());
        }
    };

    let title: String = row.get("title")?;
    let description = row
        .get::<_, Option<String>>("description")?
        .unwrap_or_default();

    Task::restore(id, title, description, due_date, done).map_err(|err| {
        DbError::InvalidData(format!("invalid task row (id={id}): {err}")).into()
    })
}

fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}
