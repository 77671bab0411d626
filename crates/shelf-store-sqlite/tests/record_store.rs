//! CRUD and aggregate integration tests for `SqliteRecordStore`.

use shelf_store::{RecordStore, StoreError, TableSeed};
use shelf_store_sqlite::SqliteRecordStore;
use shelf_types::NewUser;

async fn empty_store(dir: &tempfile::TempDir) -> SqliteRecordStore {
    let store = SqliteRecordStore::new(dir.path().join("demo.db"));
    store.create_tables().await.expect("create tables");
    store
}

async fn seeded_store(dir: &tempfile::TempDir) -> SqliteRecordStore {
    let store = empty_store(dir).await;
    store.seed().await.expect("seed");
    store
}

#[tokio::test]
async fn create_tables_twice_succeeds() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = empty_store(&dir).await;
    store.create_tables().await.expect("second create");
    assert!(store.list_users().await.expect("list").is_empty());
}

#[tokio::test]
async fn seed_inserts_sample_set_once() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = empty_store(&dir).await;

    let first = store.seed().await.expect("first seed");
    assert_eq!(first.users, TableSeed::Inserted(5));
    assert_eq!(first.products, TableSeed::Inserted(7));

    let second = store.seed().await.expect("second seed");
    assert!(second.is_noop());
    assert_eq!(store.list_users().await.expect("users").len(), 5);
    assert_eq!(store.list_products().await.expect("products").len(), 7);
}

#[tokio::test]
async fn list_users_in_insertion_order() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = seeded_store(&dir).await;
    let users = store.list_users().await.expect("list");
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(
        names,
        ["Alice Johnson", "Bob Smith", "Carol Davis", "David Wilson", "Emma Brown"]
    );
    assert!(users.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn add_user_returns_new_id() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = empty_store(&dir).await;
    let id = store
        .add_user(&NewUser::new("Alice", "alice@example.com", Some(28)))
        .await
        .expect("insert");
    assert_eq!(id, 1);

    let users = store.list_users().await.expect("list");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "alice@example.com");
    assert_eq!(users[0].age, Some(28));
    assert!(users[0].created_at.contains('T'));
}

#[tokio::test]
async fn duplicate_email_is_distinct_error_and_inserts_once() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = empty_store(&dir).await;
    store
        .add_user(&NewUser::new("Alice", "alice@example.com", Some(28)))
        .await
        .expect("first insert");

    let err = store
        .add_user(&NewUser::new("Alice2", "alice@example.com", Some(30)))
        .await
        .expect_err("duplicate");
    match err {
        StoreError::DuplicateEmail { email } => assert_eq!(email, "alice@example.com"),
        other => panic!("expected DuplicateEmail, got {other:?}"),
    }
    assert_eq!(store.list_users().await.expect("list").len(), 1);
}

#[tokio::test]
async fn add_user_without_table_is_storage_error() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = SqliteRecordStore::new(dir.path().join("bare.db"));
    let err = store
        .add_user(&NewUser::new("Nobody", "nobody@example.com", None))
        .await
        .expect_err("no table");
    assert!(matches!(err, StoreError::Storage { .. }));
    assert!(err.to_string().contains("no such table"));
}

#[tokio::test]
async fn category_search_ignores_case() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = seeded_store(&dir).await;
    let lower = store
        .search_products_by_category("electronics")
        .await
        .expect("lower");
    let title = store
        .search_products_by_category("Electronics")
        .await
        .expect("title");
    assert_eq!(lower.len(), 3);
    assert_eq!(lower, title);
}

#[tokio::test]
async fn category_search_unknown_is_empty() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = seeded_store(&dir).await;
    let found = store
        .search_products_by_category("Garden")
        .await
        .expect("search");
    assert!(found.is_empty());
}

#[tokio::test]
async fn stats_on_seeded_database() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = seeded_store(&dir).await;
    let stats = store.database_stats().await.expect("stats");
    assert_eq!(stats.total_users, 5);
    assert_eq!(stats.total_products, 7);
    assert_eq!(stats.products_in_stock, 6);
    // (28 + 34 + 22 + 31 + 26) / 5
    assert_eq!(stats.average_age, 28.2);
    assert!(stats.database_path.ends_with("demo.db"));
}

#[tokio::test]
async fn stats_average_excludes_null_ages() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = empty_store(&dir).await;
    let people = [
        ("A", "a@example.com", Some(28)),
        ("B", "b@example.com", Some(34)),
        ("C", "c@example.com", Some(22)),
        ("D", "d@example.com", None),
        ("E", "e@example.com", Some(26)),
    ];
    for (name, email, age) in people {
        store
            .add_user(&NewUser::new(name, email, age))
            .await
            .expect("insert");
    }
    let stats = store.database_stats().await.expect("stats");
    assert_eq!(stats.total_users, 5);
    assert_eq!(stats.average_age, 27.5);
}

#[tokio::test]
async fn stats_average_is_zero_without_ages() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = empty_store(&dir).await;
    let stats = store.database_stats().await.expect("stats");
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.average_age, 0.0);
}

#[tokio::test]
async fn reset_then_setup_restores_sample_counts() {
    let dir = tempfile::tempdir().expect("tmp");
    let store = seeded_store(&dir).await;
    store
        .add_user(&NewUser::new("Extra", "extra@example.com", Some(40)))
        .await
        .expect("insert");

    store.reset().await.expect("reset");
    assert!(store.list_users().await.expect("users").is_empty());

    store.create_tables().await.expect("migrate");
    store.seed().await.expect("seed");
    let stats = store.database_stats().await.expect("stats");
    assert_eq!(stats.total_users, 5);
    assert_eq!(stats.total_products, 7);
}
