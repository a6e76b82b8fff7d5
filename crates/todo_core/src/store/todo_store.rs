//! Todo store contract and SQLite implementation.

use crate::db::DbError;
use crate::model::todo::{Todo, TodoId, TodoValidationError};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TODO_SELECT_SQL: &str = "SELECT id, title, done, metadata FROM todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for record persistence and queries.
#[derive(Debug)]
pub enum StoreError {
    Validation(TodoValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Selection predicate for `TodoStore::find`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoQuery {
    #[default]
    All,
    /// Records whose `done` flag equals the value.
    Done(bool),
    /// The single record with this id, if any.
    Id(TodoId),
}

/// Record-level storage for to-do items.
pub trait TodoStore {
    fn find(&self, query: &TodoQuery) -> StoreResult<Vec<Todo>>;
    /// Inserts a new record or overwrites the stored fields of an existing one.
    fn save(&self, todo: &Todo) -> StoreResult<()>;
    /// Deletes a record. Returns whether a row was removed.
    fn remove(&self, id: TodoId) -> StoreResult<bool>;
    /// Deletes every record. Returns the number removed.
    fn drop_all(&self) -> StoreResult<usize>;
}

/// SQLite-backed todo store.
pub struct SqliteTodoStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoStore<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoStore for SqliteTodoStore<'_> {
    fn find(&self, query: &TodoQuery) -> StoreResult<Vec<Todo>> {
        let mut todos = Vec::new();
        match query {
            TodoQuery::All => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{TODO_SELECT_SQL} ORDER BY position ASC;"))?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    todos.push(parse_todo_row(row)?);
                }
            }
            TodoQuery::Done(done) => {
                let mut stmt = self.conn.prepare(&format!(
                    "{TODO_SELECT_SQL} WHERE done = ?1 ORDER BY position ASC;"
                ))?;
                let mut rows = stmt.query([bool_to_int(*done)])?;
                while let Some(row) = rows.next()? {
                    todos.push(parse_todo_row(row)?);
                }
            }
            TodoQuery::Id(id) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;
                let mut rows = stmt.query([id.to_string()])?;
                if let Some(row) = rows.next()? {
                    todos.push(parse_todo_row(row)?);
                }
            }
        }
        Ok(todos)
    }

    fn save(&self, todo: &Todo) -> StoreResult<()> {
        todo.validate()?;

        let metadata = todo
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| StoreError::InvalidData(format!("unserializable metadata: {err}")))?;

        let existing: Option<i64> = self
            .conn
            .query_row(
                "SELECT position FROM todos WHERE id = ?1;",
                [todo.id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            self.conn.execute(
                "UPDATE todos
                 SET
                    title = ?1,
                    done = ?2,
                    metadata = ?3,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?4;",
                params![
                    todo.title.as_str(),
                    bool_to_int(todo.done),
                    metadata,
                    todo.id.to_string(),
                ],
            )?;
            debug!("event=todo_save module=store status=ok op=update id={}", todo.id);
        } else {
            self.conn.execute(
                "INSERT INTO todos (id, title, done, metadata) VALUES (?1, ?2, ?3, ?4);",
                params![
                    todo.id.to_string(),
                    todo.title.as_str(),
                    bool_to_int(todo.done),
                    metadata,
                ],
            )?;
            debug!("event=todo_save module=store status=ok op=insert id={}", todo.id);
        }

        Ok(())
    }

    fn remove(&self, id: TodoId) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;
        debug!(
            "event=todo_remove module=store status=ok id={} removed={}",
            id, changed
        );
        Ok(changed > 0)
    }

    fn drop_all(&self) -> StoreResult<usize> {
        let changed = self.conn.execute("DELETE FROM todos;", [])?;
        debug!("event=todo_drop_all module=store status=ok removed={changed}");
        Ok(changed)
    }
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<Todo> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| StoreError::InvalidData(format!("invalid id `{id_text}` in todos.id")))?;

    let done = match row.get::<_, i64>("done")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid done value `{other}` in todos.done"
            )));
        }
    };

    let metadata = match row.get::<_, Option<String>>("metadata")? {
        Some(text) => Some(serde_json::from_str(&text).map_err(|err| {
            StoreError::InvalidData(format!("invalid metadata in todos.metadata: {err}"))
        })?),
        None => None,
    };

    let todo = Todo {
        id,
        title: row.get("title")?,
        done,
        metadata,
    };
    todo.validate()?;
    Ok(todo)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

