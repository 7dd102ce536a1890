//! Task store: owner of the durable task collection.
//!
//! # Responsibility
//! - Own the SQLite connection for the whole open lifetime.
//! - Expose the create/query/update/delete use cases to callers.
//! - Emit metadata-only logging events for every mutation.
//!
//! # Invariants
//! - Schema is ensured before the store is handed out.
//! - Each write is a single autocommit statement, durable on return.
//! - `close` consumes the store; dropping it also releases the connection.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{
    NewTask, RepoError, RepoResult, SqliteTaskRepository, TaskListQuery, TaskRepository,
};
use chrono::NaiveDate;
use log::{debug, error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// File name of the task database inside a data directory.
pub const TASKS_DB_FILE_NAME: &str = "tasks.db";

pub type StoreError = RepoError;
pub type StoreResult<T> = RepoResult<T>;

/// Single-session handle to a task database.
#[derive(Debug)]
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Opens (creating when needed) `data_dir/tasks.db`.
    ///
    /// # Errors
    /// - `Storage(Io)` when `data_dir` cannot be created.
    /// - `Storage(..)` when the database cannot be opened or initialized.
    pub fn open(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|source| DbError::Io {
            context: format!("failed to create data directory `{}`", data_dir.display()),
            source,
        })?;
        Self::open_file(db_path(data_dir))
    }

    /// Opens a task database at an explicit file path.
    pub fn open_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a throwaway in-memory task database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Creates a pending task and returns it with its assigned id.
    ///
    /// # Errors
    /// - `Validation(EmptyTitle)` when `title` is empty.
    pub fn add(
        &self,
        title: &str,
        description: &str,
        due_date: Option<NaiveDate>,
    ) -> StoreResult<Task> {
        let draft = NewTask {
            title,
            description,
            due_date,
        };
        let result = self.repo().create_task(&draft);
        match &result {
            Ok(task) => info!(
                "event=task_add module=store status=ok id={} has_due_date={}",
                task.id(),
                task.due_date().is_some()
            ),
            Err(err) => log_failure("task_add", err),
        }
        result
    }

    /// Lists tasks in listing order.
    ///
    /// With `include_done = false` only pending tasks are returned.
    pub fn list(&self, include_done: bool) -> StoreResult<Vec<Task>> {
        let result = self.repo().list_tasks(&TaskListQuery { include_done });
        match &result {
            Ok(tasks) => debug!(
                "event=task_list module=store status=ok include_done={} count={}",
                include_done,
                tasks.len()
            ),
            Err(err) => log_failure("task_list", err),
        }
        result
    }

    /// Marks a task as done. Returns `false` when no task has this id.
    ///
    /// Marking an already done task succeeds and returns `true`.
    pub fn mark_done(&self, id: TaskId) -> StoreResult<bool> {
        let result = self.repo().mark_task_done(id);
        match &result {
            Ok(found) => info!("event=task_done module=store status=ok id={id} found={found}"),
            Err(err) => log_failure("task_done", err),
        }
        result
    }

    /// Deletes a task permanently. Returns `false` when no task has this id.
    pub fn delete(&self, id: TaskId) -> StoreResult<bool> {
        let result = self.repo().delete_task(id);
        match &result {
            Ok(found) => info!("event=task_delete module=store status=ok id={id} found={found}"),
            Err(err) => log_failure("task_delete", err),
        }
        result
    }

    /// Removes every done task and returns how many were removed.
    pub fn clear_done(&self) -> StoreResult<usize> {
        let result = self.repo().delete_done_tasks();
        match &result {
            Ok(removed) => info!("event=task_clear_done module=store status=ok removed={removed}"),
            Err(err) => log_failure("task_clear_done", err),
        }
        result
    }

    /// Closes the underlying connection and reports close failures.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_conn, err)| {
            error!("event=db_close module=store status=error error={err}");
            RepoError::from(err)
        })?;
        debug!("event=db_close module=store status=ok");
        Ok(())
    }

    fn repo(&self) -> SqliteTaskRepository<'_> {
        SqliteTaskRepository::new(&self.conn)
    }
}

/// Returns the database path used by [`TaskStore::open`] for `data_dir`.
pub fn db_path(data_dir: impl AsRef<Path>) -> PathBuf {
    data_dir.as_ref().join(TASKS_DB_FILE_NAME)
}

fn log_failure(event: &str, err: &StoreError) {
    if err.is_validation() {
        info!("event={event} module=store status=rejected error_code=validation error={err}");
    } else {
        error!("event={event} module=store status=error error_code=storage error={err}");
    }
}
