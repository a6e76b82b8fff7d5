//! Todo model service.
//!
//! # Responsibility
//! - Implement the async `TodoModel` contract on top of a `TodoStore`.
//! - Own id generation and partial-field merging.
//!
//! # Invariants
//! - Each operation has reached the store before its future resolves, so a
//!   later read always observes an earlier write.
//! - Service APIs never bypass store validation.

use crate::model::todo::{Todo, TodoCounts, TodoId, TodoPatch};
use crate::store::todo_store::{StoreError, TodoQuery, TodoStore};
use async_trait::async_trait;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors surfaced by model operations.
#[derive(Debug)]
pub enum ModelError {
    /// The addressed record does not exist.
    NotFound(TodoId),
    Store(StoreError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ModelError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Async model contract the controller talks to.
///
/// Futures are `?Send`: the whole application runs on one logical thread.
#[async_trait(?Send)]
pub trait TodoModel {
    /// Reads records matching `query`, in insertion order.
    async fn read(&self, query: TodoQuery) -> ModelResult<Vec<Todo>>;
    /// Creates an open record with the trimmed `title`.
    async fn create(&self, title: &str, metadata: Option<serde_json::Value>) -> ModelResult<Todo>;
    /// Merges `patch` into the stored record and returns the result.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> ModelResult<Todo>;
    async fn remove(&self, id: TodoId) -> ModelResult<()>;
    async fn get_count(&self) -> ModelResult<TodoCounts>;
}

/// Default model implementation backed by a `TodoStore`.
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Removes every record. Used by the CLI `reset` command.
    pub fn remove_all(&self) -> ModelResult<usize> {
        Ok(self.store.drop_all()?)
    }
}

#[async_trait(?Send)]
impl<S: TodoStore> TodoModel for TodoService<S> {
    async fn read(&self, query: TodoQuery) -> ModelResult<Vec<Todo>> {
        Ok(self.store.find(&query)?)
    }

    async fn create(&self, title: &str, metadata: Option<serde_json::Value>) -> ModelResult<Todo> {
        let mut todo = Todo::new(title.trim());
        todo.metadata = metadata;
        self.store.save(&todo)?;
        debug!("event=todo_create module=service status=ok id={}", todo.id);
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> ModelResult<Todo> {
        let mut todo = self
            .store
            .find(&TodoQuery::Id(id))?
            .into_iter()
            .next()
            .ok_or(ModelError::NotFound(id))?;
        todo.apply(&patch);
        self.store.save(&todo)?;
        debug!("event=todo_update module=service status=ok id={id}");
        Ok(todo)
    }

    async fn remove(&self, id: TodoId) -> ModelResult<()> {
        self.store.remove(id)?;
        Ok(())
    }

    async fn get_count(&self) -> ModelResult<TodoCounts> {
        let todos = self.store.find(&TodoQuery::All)?;
        let completed = todos.iter().filter(|todo| todo.done).count();
        Ok(TodoCounts {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        })
    }
}
