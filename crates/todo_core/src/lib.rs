//! Core of the to-do list application.
//!
//! Store -> model service -> controller, with the view behind a trait so any
//! front end can drive it.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use config::TodoConfig;
pub use controller::route::{Filter, UnknownRoute};
pub use controller::todo_controller::{ControllerError, ControllerResult, TodoController};
pub use logging::{init_logging, init_stderr_logging, logging_status};
pub use model::todo::{Todo, TodoCounts, TodoId, TodoPatch, TodoValidationError};
pub use service::todo_service::{ModelError, ModelResult, TodoModel, TodoService};
pub use store::todo_store::{SqliteTodoStore, StoreError, StoreResult, TodoQuery, TodoStore};
pub use view::{RenderCommand, TodoView, ViewEvent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
