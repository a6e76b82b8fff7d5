use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;
use todo_core::db::open_db_in_memory;
use todo_core::{RenderCommand, SqliteTodoStore, TodoConfig, TodoController, TodoService};

/// Keeps every record so the test can assert on what was logged.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .drain(..)
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message)
        .collect()
}

// One test per binary: the logger is process-wide.
#[tokio::test]
async fn unknown_route_logs_a_bad_route_warning() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    for dev_mode in [false, true] {
        let conn = open_db_in_memory().unwrap();
        let model = TodoService::new(SqliteTodoStore::new(&conn));
        let config = TodoConfig::new("todos", dev_mode);
        let mut controller = TodoController::new(model, Vec::<RenderCommand>::new(), config);

        controller.set_view("").await.unwrap();
        assert!(take_warnings().is_empty());

        controller.set_view("#/bogus").await.unwrap();

        let warnings = take_warnings();
        assert_eq!(warnings.len(), 1, "dev_mode={dev_mode}: {warnings:?}");
        assert!(warnings[0].contains("status=bad_route"));
        assert_eq!(warnings[0].contains("unknown route"), dev_mode);
    }
}
