use todo_core::db::open_db_in_memory;
use todo_core::{
    ModelError, SqliteTodoStore, TodoCounts, TodoModel, TodoPatch, TodoQuery, TodoService,
};
use uuid::Uuid;

#[tokio::test]
async fn create_trims_title_and_starts_open() {
    let conn = open_db_in_memory().unwrap();
    let model = TodoService::new(SqliteTodoStore::new(&conn));

    let created = model.create("  walk the dog  ", None).await.unwrap();
    assert_eq!(created.title, "walk the dog");
    assert!(!created.done);
    assert_eq!(created.metadata, None);

    let stored = model.read(TodoQuery::Id(created.id)).await.unwrap();
    assert_eq!(stored, vec![created]);
}

#[tokio::test]
async fn update_merges_only_set_fields() {
    let conn = open_db_in_memory().unwrap();
    let model = TodoService::new(SqliteTodoStore::new(&conn));

    let created = model.create("draft", None).await.unwrap();
    let done = model.update(created.id, TodoPatch::done(true)).await.unwrap();
    assert_eq!(done.title, "draft");
    assert!(done.done);

    let renamed = model
        .update(created.id, TodoPatch::title("final"))
        .await
        .unwrap();
    assert_eq!(renamed.title, "final");
    assert!(renamed.done);
    assert_eq!(renamed.id, created.id);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let model = TodoService::new(SqliteTodoStore::new(&conn));

    let missing = Uuid::new_v4();
    let err = model
        .update(missing, TodoPatch::done(true))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::NotFound(id) if id == missing));
}

#[tokio::test]
async fn get_count_splits_active_and_completed() {
    let conn = open_db_in_memory().unwrap();
    let model = TodoService::new(SqliteTodoStore::new(&conn));

    assert_eq!(model.get_count().await.unwrap(), TodoCounts::default());

    let a = model.create("a", None).await.unwrap();
    model.create("b", None).await.unwrap();
    model.create("c", None).await.unwrap();
    model.update(a.id, TodoPatch::done(true)).await.unwrap();

    assert_eq!(
        model.get_count().await.unwrap(),
        TodoCounts {
            total: 3,
            active: 2,
            completed: 1,
        }
    );

    model.remove(a.id).await.unwrap();
    assert_eq!(model.get_count().await.unwrap().completed, 0);
}

#[tokio::test]
async fn remove_all_clears_everything() {
    let conn = open_db_in_memory().unwrap();
    let model = TodoService::new(SqliteTodoStore::new(&conn));

    model.create("a", None).await.unwrap();
    model.create("b", None).await.unwrap();

    assert_eq!(model.remove_all().unwrap(), 2);
    assert_eq!(model.get_count().await.unwrap().total, 0);
}
