//! Model layer consumed by the controller.
//!
//! # Responsibility
//! - Expose query, create, update, remove and count use-cases over a store.
//! - Keep the controller decoupled from storage details.

pub mod todo_service;
