//! Core storage and query logic for the local task tracker.
//! This crate is the single source of truth for task invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use db::DbError;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{parse_due_date, Task, TaskId, TaskValidationError};
pub use repo::task_repo::{
    NewTask, RepoError, RepoResult, SqliteTaskRepository, TaskListQuery, TaskRepository,
};
pub use store::{StoreError, StoreResult, TaskStore, TASKS_DB_FILE_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
