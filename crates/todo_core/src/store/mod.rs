//! Persistence layer for to-do records.
//!
//! # Responsibility
//! - Define the record-level storage contract used by the model service.
//! - Keep SQL details out of the model and controller.
//!
//! # Invariants
//! - Writes call `Todo::validate()` before touching storage.
//! - Reads return records in insertion order.

pub mod todo_store;
