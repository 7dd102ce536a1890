//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Absence of a matching id is reported as `false`, not as an error.

pub mod task_repo;
