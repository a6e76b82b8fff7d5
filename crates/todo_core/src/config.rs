//! Runtime configuration passed explicitly into the controller.

/// Default store name; the SQLite file is `<name>.sqlite3`.
pub const DEFAULT_STORE_NAME: &str = "todos";

/// Application settings threaded through construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Logical name of the list; also names the database file.
    pub store_name: String,
    /// Developer mode: verbose logs and full error detail on warnings.
    pub dev_mode: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            dev_mode: false,
        }
    }
}

impl TodoConfig {
    pub fn new(store_name: impl Into<String>, dev_mode: bool) -> Self {
        Self {
            store_name: store_name.into(),
            dev_mode,
        }
    }

    /// Log level used when the caller does not pick one.
    ///
    /// - developer mode -> `debug`
    /// - otherwise -> `warn`
    pub fn default_log_level(&self) -> &'static str {
        if self.dev_mode {
            "debug"
        } else {
            "warn"
        }
    }

    pub fn db_file_name(&self) -> String {
        format!("{}.sqlite3", self.store_name)
    }
}

#[cfg(test)]
mod tests {
    use super::TodoConfig;

    #[test]
    fn default_config_is_quiet() {
        let config = TodoConfig::default();
        assert!(!config.dev_mode);
        assert_eq!(config.default_log_level(), "warn");
        assert_eq!(config.db_file_name(), "todos.sqlite3");
    }

    #[test]
    fn dev_mode_raises_verbosity() {
        let config = TodoConfig::new("groceries", true);
        assert_eq!(config.default_log_level(), "debug");
        assert_eq!(config.db_file_name(), "groceries.sqlite3");
    }
}
