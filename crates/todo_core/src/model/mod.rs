//! Domain model for to-do records.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, model and view.
//! - Provide the aggregate count shape rendered by the footer.
//!
//! # Invariants
//! - Every record is identified by a stable `TodoId`.
//! - Removal is a hard delete; there are no tombstones.

pub mod todo;
