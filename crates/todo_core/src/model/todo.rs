//! To-do record model.
//!
//! # Responsibility
//! - Define the `{id, title, done}` record and its partial-update patch.
//! - Validate records before they reach persistence.
//!
//! # Invariants
//! - `id` is never nil and never changes after construction.
//! - `title` is non-blank once persisted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a to-do record.
pub type TodoId = Uuid;

/// Validation failures for a to-do record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    NilId,
    BlankTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be nil"),
            Self::BlankTitle => write!(f, "todo title must not be blank"),
        }
    }
}

impl Error for TodoValidationError {}

/// A single task item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    /// Free-form caller data. `None` serializes as `null`.
    pub metadata: Option<serde_json::Value>,
}

impl Todo {
    /// Creates an open task with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
            metadata: None,
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Rejects the nil UUID so imported records keep a usable identity.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Result<Self, TodoValidationError> {
        if id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            done: false,
            metadata: None,
        })
    }

    /// Checks the invariants required for persistence.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Merges the set fields of `patch` into this record.
    ///
    /// The id is never touched.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }
}

/// Partial update for a record. Unset fields are left as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            done: None,
        }
    }

    pub fn done(done: bool) -> Self {
        Self {
            title: None,
            done: Some(done),
        }
    }
}

/// Aggregate counts over all stored records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoPatch, TodoValidationError};
    use uuid::Uuid;

    #[test]
    fn new_todo_is_open_with_fresh_id() {
        let todo = Todo::new("ship it");
        assert!(!todo.id.is_nil());
        assert!(!todo.done);
        assert_eq!(todo.metadata, None);
        assert_ne!(todo.id, Todo::new("ship it").id);
    }

    #[test]
    fn with_id_rejects_nil() {
        assert_eq!(
            Todo::with_id(Uuid::nil(), "x").unwrap_err(),
            TodoValidationError::NilId
        );
    }

    #[test]
    fn validate_rejects_blank_title() {
        assert_eq!(
            Todo::new(" \t").validate(),
            Err(TodoValidationError::BlankTitle)
        );
        assert_eq!(Todo::new("ok").validate(), Ok(()));
    }

    #[test]
    fn apply_merges_set_fields_only() {
        let mut todo = Todo::new("before");
        let id = todo.id;

        todo.apply(&TodoPatch::done(true));
        assert_eq!(todo.title, "before");
        assert!(todo.done);

        todo.apply(&TodoPatch::title("after"));
        assert_eq!(todo.title, "after");
        assert!(todo.done);
        assert_eq!(todo.id, id);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let todo = Todo::with_id(id, "read").unwrap();

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["title"], "read");
        assert_eq!(json["done"], false);
        assert!(json["metadata"].is_null());

        let decoded: Todo = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, todo);
    }
}
