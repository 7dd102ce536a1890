//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define canonical data structures used by store and CLI.
//!
//! # Invariants
//! - Every task is identified by a storage-assigned `TaskId`.
//! - Deletion is a hard delete; ids are still never reused.

pub mod task;
