//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record returned by the store.
//! - Provide the one-way `done` transition as a pure value transformation.
//! - Define the ordering used when listing tasks.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused for another task.
//! - `title` is never empty.
//! - `done` only moves from `false` to `true`.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

/// Storage-assigned task identifier.
pub type TaskId = i64;

/// Wire/storage format for due dates (`YYYY-MM-DD`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Caller input that violates a task precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("invalid due date `{value}`; expected YYYY-MM-DD")]
    InvalidDueDate { value: String },
}

/// One persisted unit of work.
///
/// Values are owned snapshots. Changing a copy never touches stored state;
/// persistence of `mark_done` is the store's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    done: bool,
}

impl Task {
    /// Creates a pending task with a storage-assigned id.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty or whitespace only.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, TaskValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            title,
            description: description.into(),
            due_date,
            done: false,
        })
    }

    /// Rebuilds a task from a persisted row, including its `done` state.
    pub(crate) fn restore(
        id: TaskId,
        title: String,
        description: String,
        due_date: Option<NaiveDate>,
        done: bool,
    ) -> Result<Self, TaskValidationError> {
        let task = Self::new(id, title, description, due_date)?;
        Ok(if done { task.mark_done() } else { task })
    }

    /// Returns a copy of this task with `done = true`.
    #[must_use]
    pub fn mark_done(&self) -> Self {
        Self {
            done: true,
            ..self.clone()
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Listing comparator.
    ///
    /// Keys, in order:
    /// 1. pending before done
    /// 2. due date ascending, tasks without a due date last
    /// 3. id ascending (creation order)
    pub fn listing_order(&self, other: &Self) -> Ordering {
        self.done
            .cmp(&other.done)
            .then_with(|| compare_due_dates(self.due_date, other.due_date))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Checks the non-empty title precondition.
pub fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

/// Parses a caller-supplied `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, TaskValidationError> {
    parse_iso_date(value.trim()).ok_or_else(|| TaskValidationError::InvalidDueDate {
        value: value.to_string(),
    })
}

/// Strict `YYYY-MM-DD` parse shared by caller input and persisted rows.
pub(crate) fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields for `%m`/`%d`; the format is fixed-width.
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).ok()
}

fn compare_due_dates(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
