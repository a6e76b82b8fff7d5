//! Line-oriented terminal view.
//!
//! Renders controller commands as text and remembers the last shown list so
//! the input parser can address rows by their 1-based position.

use log::warn;
use std::fmt;
use std::io::Write;
use todo_core::{RenderCommand, Todo, TodoCounts, TodoId, TodoView};

pub struct TerminalView<W: Write> {
    out: W,
    entries: Vec<Todo>,
    visible: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
            visible: false,
        }
    }

    /// Rows of the most recent list render.
    pub fn entries(&self) -> &[Todo] {
        &self.entries
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{line}") {
            warn!("event=render module=cli status=error error={err}");
        }
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.entries.iter().position(|todo| todo.id == id)
    }

    fn emit_row(&mut self, index: usize) {
        let todo = &self.entries[index];
        let line = format_row(index + 1, todo);
        self.emit(format_args!("{line}"));
    }
}

impl<W: Write> TodoView for TerminalView<W> {
    fn render(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::ShowEntries(todos) => {
                self.entries = todos;
                if self.entries.is_empty() {
                    self.emit(format_args!("  (no items)"));
                }
                for index in 0..self.entries.len() {
                    self.emit_row(index);
                }
            }
            RenderCommand::ClearNewTodo => {}
            RenderCommand::EditItem { id, title } => match self.position(id) {
                Some(index) => self.emit(format_args!(
                    "editing {}: {title}  (save {} <title> | cancel {})",
                    index + 1,
                    index + 1,
                    index + 1
                )),
                None => self.emit(format_args!("editing: {title}")),
            },
            RenderCommand::EditItemDone { id, title } => {
                if let Some(index) = self.position(id) {
                    self.entries[index].title = title;
                    self.emit_row(index);
                }
            }
            RenderCommand::RemoveItem(id) => {
                if let Some(index) = self.position(id) {
                    let removed = self.entries.remove(index);
                    self.emit(format_args!("removed: {}", removed.title));
                }
            }
            RenderCommand::SetAsDone { id, done } => {
                if let Some(index) = self.position(id) {
                    self.entries[index].done = done;
                    self.emit_row(index);
                }
            }
            RenderCommand::UpdateElementCount(counts) => {
                let summary = format_count(counts);
                self.emit(format_args!("{summary}"));
            }
            RenderCommand::ContentBlockVisibility { visible } => {
                if self.visible && !visible {
                    self.emit(format_args!("  (list is empty)"));
                }
                self.visible = visible;
            }
            RenderCommand::SetFilter(page) => {
                let bar = format_filter_bar(&page);
                self.emit(format_args!("{bar}"));
            }
        }
    }
}

fn format_row(position: usize, todo: &Todo) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    format!("{position:>3}. [{mark}] {}", todo.title)
}

fn format_count(counts: TodoCounts) -> String {
    let noun = if counts.active == 1 { "item" } else { "items" };
    if counts.completed > 0 {
        format!(
            "{} {noun} left, {} completed (clear)",
            counts.active, counts.completed
        )
    } else {
        format!("{} {noun} left", counts.active)
    }
}

/// Highlights the selected link; `page` is the raw route segment.
fn format_filter_bar(page: &str) -> String {
    [("", "All"), ("active", "Active"), ("completed", "Completed")]
        .iter()
        .map(|(segment, label)| {
            if *segment == page {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
