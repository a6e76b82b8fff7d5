//! Controller layer: view events in, model calls, render commands out.
//!
//! # Responsibility
//! - Translate `ViewEvent`s into model operations.
//! - Own the route/filter state and decide when the list is re-rendered.
//!
//! # Invariants
//! - Task data is always re-read from the model, never cached here.
//! - An unknown route never fails a public operation.

pub mod route;
pub mod todo_controller;
