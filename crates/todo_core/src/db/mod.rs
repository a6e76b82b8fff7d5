//! Connections for the to-do store.
//!
//! `open_db` and `open_db_in_memory` hand out connections whose schema is
//! already at `migrations::latest_version()`; nothing else in the crate opens
//! SQLite directly.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Why a store connection could not be produced.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected the open, a pragma, or a migration statement.
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build. It is left untouched.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "to-do list uses schema v{found}; this build reads up to v{supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DbError;

    #[test]
    fn schema_too_new_names_both_versions() {
        let err = DbError::SchemaTooNew {
            found: 7,
            supported: 2,
        };
        assert_eq!(
            err.to_string(),
            "to-do list uses schema v7; this build reads up to v2"
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
