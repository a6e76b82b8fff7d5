use rusqlite::Connection;
use todo_core::db::migrations::{latest_version, user_version};
use todo_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn).unwrap(), latest_version());
    assert_column_exists(&conn, "todos", "title");
    assert_column_exists(&conn, "todos", "done");
    assert_column_exists(&conn, "todos", "metadata");
}

#[test]
fn reopening_file_database_keeps_schema_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO todos (id, title) VALUES ('6f1c1c5e-8f43-4f0a-9d67-1f8b2f6d8a01', 'persisted');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(user_version(&second).unwrap(), latest_version());
    let count: i64 = second
        .query_row("SELECT COUNT(*) FROM todos;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 42);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_column_exists(conn: &Connection, table: &str, column: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2);",
            [table, column],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "column {table}.{column} does not exist");
}
