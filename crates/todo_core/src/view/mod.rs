//! View contract: render commands in, user events out.
//!
//! # Responsibility
//! - Name every UI update the controller can request.
//! - Name every user interaction a view can report.
//!
//! # Invariants
//! - Render commands are one-way; a view never answers the controller.
//! - Each user interaction is reported as exactly one `ViewEvent`.

use crate::model::todo::{Todo, TodoCounts, TodoId};

/// One-way instruction from the controller to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Replace the rendered list with these records.
    ShowEntries(Vec<Todo>),
    /// Empty the new-item input.
    ClearNewTodo,
    /// Put a row into edit mode.
    EditItem { id: TodoId, title: String },
    /// Leave edit mode, showing `title`.
    EditItemDone { id: TodoId, title: String },
    RemoveItem(TodoId),
    SetAsDone { id: TodoId, done: bool },
    UpdateElementCount(TodoCounts),
    /// Show or hide the list body and footer.
    ContentBlockVisibility { visible: bool },
    /// Highlight the filter link for this raw route segment ('' is All).
    SetFilter(String),
}

impl RenderCommand {
    /// Stable command name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowEntries(_) => "showEntries",
            Self::ClearNewTodo => "clearNewTodo",
            Self::EditItem { .. } => "editItem",
            Self::EditItemDone { .. } => "editItemDone",
            Self::RemoveItem(_) => "removeItem",
            Self::SetAsDone { .. } => "setAsDone",
            Self::UpdateElementCount(_) => "updateElementCount",
            Self::ContentBlockVisibility { .. } => "contentBlockVisibility",
            Self::SetFilter(_) => "setFilter",
        }
    }
}

/// User interaction reported by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    NewTodo(String),
    ItemEdit { id: TodoId },
    ItemEditDone { id: TodoId, title: String },
    ItemEditCancel { id: TodoId },
    ItemRemove { id: TodoId },
    SetAsDone { id: TodoId, checked: bool },
    ClearCompleted,
}

impl ViewEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewTodo(_) => "newTodo",
            Self::ItemEdit { .. } => "itemEdit",
            Self::ItemEditDone { .. } => "itemEditDone",
            Self::ItemEditCancel { .. } => "itemEditCancel",
            Self::ItemRemove { .. } => "itemRemove",
            Self::SetAsDone { .. } => "setAsDone",
            Self::ClearCompleted => "clearCompleted",
        }
    }
}

/// Anything that can apply render commands.
pub trait TodoView {
    fn render(&mut self, command: RenderCommand);
}

/// Collects commands in order; handy for headless runs and tests.
impl TodoView for Vec<RenderCommand> {
    fn render(&mut self, command: RenderCommand) {
        self.push(command);
    }
}
