//! Todo controller.
//!
//! # Responsibility
//! - Mediate between a `TodoModel` and a `TodoView`.
//! - Run the route state machine: set view -> filter -> show.
//!
//! # Invariants
//! - Counts are refreshed after every mutating operation.
//! - `clear_completed` issues every removal before the final re-read.
//! - The last rendered route is recorded even when dispatch fails.

use crate::config::TodoConfig;
use crate::controller::route::{capitalize, page_segment, should_render, Filter};
use crate::model::todo::{TodoId, TodoPatch};
use crate::service::todo_service::{ModelError, TodoModel};
use crate::store::todo_store::TodoQuery;
use crate::view::{RenderCommand, TodoView, ViewEvent};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Failures that escape a controller operation.
///
/// Blank titles and unknown routes are absorbed and never show up here.
#[derive(Debug)]
pub enum ControllerError {
    /// A record needed for edit mode is gone.
    TodoNotFound(TodoId),
    Model(ModelError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TodoNotFound(_) => None,
            Self::Model(err) => Some(err),
        }
    }
}

impl From<ModelError> for ControllerError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Coordinates one model and one view.
pub struct TodoController<M: TodoModel, V: TodoView> {
    model: M,
    view: V,
    config: TodoConfig,
    active_route: String,
    last_active_route: Option<String>,
}

impl<M: TodoModel, V: TodoView> TodoController<M, V> {
    /// Creates a controller that starts on the `All` route.
    ///
    /// Nothing is rendered until the host calls `set_view`.
    pub fn new(model: M, view: V, config: TodoConfig) -> Self {
        Self {
            model,
            view,
            config,
            active_route: Filter::All.name().to_string(),
            last_active_route: None,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    /// Route name as last set, before capitalization.
    pub fn active_route(&self) -> &str {
        &self.active_route
    }

    /// Parsed filter for the active route; `None` for an unknown route.
    pub fn active_filter(&self) -> Option<Filter> {
        capitalize(&self.active_route).parse().ok()
    }

    /// Route name the last `_filter` pass attempted.
    pub fn last_active_route(&self) -> Option<&str> {
        self.last_active_route.as_deref()
    }

    /// Routes one view event to its operation.
    pub async fn handle_event(&mut self, event: ViewEvent) -> ControllerResult<()> {
        debug!(
            "event=view_event module=controller status=start name={}",
            event.name()
        );
        match event {
            ViewEvent::NewTodo(title) => self.add_item(&title).await,
            ViewEvent::ItemEdit { id } => self.edit_item(id).await,
            ViewEvent::ItemEditDone { id, title } => self.edit_item_save(id, &title).await,
            ViewEvent::ItemEditCancel { id } => self.edit_item_cancel(id).await,
            ViewEvent::ItemRemove { id } => self.remove_item(id).await,
            ViewEvent::SetAsDone { id, checked } => self.set_as_done(id, checked).await,
            ViewEvent::ClearCompleted => self.clear_completed().await,
        }
    }

    /// Applies a route fragment such as `""`, `"#/active"` or `"#/completed"`.
    pub async fn set_view(&mut self, fragment: &str) -> ControllerResult<()> {
        debug!("event=set_view module=controller fragment={fragment:?}");
        let page = page_segment(fragment).to_string();
        self.update_filter_state(page).await
    }

    pub async fn show_all(&mut self) -> ControllerResult<()> {
        self.show_entries(TodoQuery::All).await
    }

    pub async fn show_active(&mut self) -> ControllerResult<()> {
        self.show_entries(TodoQuery::Done(false)).await
    }

    pub async fn show_completed(&mut self) -> ControllerResult<()> {
        self.show_entries(TodoQuery::Done(true)).await
    }

    /// Removes every completed record, then renders the completed set again.
    pub async fn clear_completed(&mut self) -> ControllerResult<()> {
        let completed = self.model.read(TodoQuery::Done(true)).await?;
        debug!(
            "event=clear_completed module=controller status=start count={}",
            completed.len()
        );
        for todo in &completed {
            self.model.remove(todo.id).await?;
        }

        let remaining = self.model.read(TodoQuery::Done(true)).await?;
        self.view.render(RenderCommand::ShowEntries(remaining));
        self.update_count().await
    }

    /// Creates a record from user input. Blank input is ignored.
    pub async fn add_item(&mut self, title: &str) -> ControllerResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }

        self.model.create(title, None).await?;
        self.view.render(RenderCommand::ClearNewTodo);
        self.filter(true).await
    }

    /// Puts a row into edit mode.
    pub async fn edit_item(&mut self, id: TodoId) -> ControllerResult<()> {
        let title = self.stored_title(id).await?;
        self.view.render(RenderCommand::EditItem { id, title });
        Ok(())
    }

    /// Saves an edit as typed. A blank title deletes the record.
    pub async fn edit_item_save(&mut self, id: TodoId, title: &str) -> ControllerResult<()> {
        if title.trim().is_empty() {
            return self.remove_item(id).await;
        }

        self.model.update(id, TodoPatch::title(title)).await?;
        self.view.render(RenderCommand::EditItemDone {
            id,
            title: title.to_string(),
        });
        Ok(())
    }

    /// Leaves edit mode showing the stored title.
    pub async fn edit_item_cancel(&mut self, id: TodoId) -> ControllerResult<()> {
        let title = self.stored_title(id).await?;
        self.view.render(RenderCommand::EditItemDone { id, title });
        Ok(())
    }

    pub async fn remove_item(&mut self, id: TodoId) -> ControllerResult<()> {
        self.model.remove(id).await?;
        self.view.render(RenderCommand::RemoveItem(id));
        self.filter(false).await
    }

    pub async fn set_as_done(&mut self, id: TodoId, done: bool) -> ControllerResult<()> {
        self.model.update(id, TodoPatch::done(done)).await?;
        self.view.render(RenderCommand::SetAsDone { id, done });
        self.filter(false).await
    }

    async fn show_entries(&mut self, query: TodoQuery) -> ControllerResult<()> {
        let todos = self.model.read(query).await?;
        self.view.render(RenderCommand::ShowEntries(todos));
        Ok(())
    }

    async fn show(&mut self, filter: Filter) -> ControllerResult<()> {
        match filter {
            Filter::All => self.show_all().await,
            Filter::Active => self.show_active().await,
            Filter::Completed => self.show_completed().await,
        }
    }

    async fn stored_title(&self, id: TodoId) -> ControllerResult<String> {
        self.model
            .read(TodoQuery::Id(id))
            .await?
            .into_iter()
            .next()
            .map(|todo| todo.title)
            .ok_or(ControllerError::TodoNotFound(id))
    }

    /// Renders the current counts and content visibility.
    pub async fn update_count(&mut self) -> ControllerResult<()> {
        let counts = self.model.get_count().await?;
        self.view.render(RenderCommand::UpdateElementCount(counts));
        self.view.render(RenderCommand::ContentBlockVisibility {
            visible: counts.total > 0,
        });
        Ok(())
    }

    /// Refreshes counts and, when needed, re-renders the list for the active route.
    async fn filter(&mut self, force: bool) -> ControllerResult<()> {
        let active_route = capitalize(&self.active_route);
        debug!("event=filter module=controller force={force} route={active_route}");

        self.update_count().await?;

        if should_render(force, self.last_active_route.as_deref(), &active_route) {
            match active_route.parse::<Filter>() {
                Ok(filter) => self.show(filter).await?,
                Err(err) => {
                    if self.config.dev_mode {
                        warn!("event=filter module=controller status=bad_route error={err}");
                    } else {
                        warn!("event=filter module=controller status=bad_route");
                    }
                }
            }
        }

        self.last_active_route = Some(active_route);
        Ok(())
    }

    async fn update_filter_state(&mut self, page: String) -> ControllerResult<()> {
        self.active_route = if page.is_empty() {
            Filter::All.name().to_string()
        } else {
            page.clone()
        };

        self.filter(false).await?;
        self.view.render(RenderCommand::SetFilter(page));
        Ok(())
    }
}
