//! Storage-level tests for the roster database, covering the UNIQUE
//! constraint on usernames and the absence of partial writes.

use std::sync::Arc;

use roster_server::database::RosterDatabase;
use tempfile::TempDir;

async fn setup_test_db() -> anyhow::Result<(RosterDatabase, TempDir)> {
    let dir = TempDir::new()?;
    let url = format!("sqlite://{}", dir.path().join("roster.db").display());

    let db = RosterDatabase::new(&url).await?;
    db.run_migrations().await?;

    Ok((db, dir))
}

#[tokio::test]
async fn test_duplicate_insert_leaves_single_row() {
    let (db, _dir) = setup_test_db().await.unwrap();

    db.create_user("carol").await.unwrap();

    let count_before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&db.pool)
        .await
        .unwrap();

    let duplicate = db.create_user("carol").await;
    let err = duplicate.expect_err("duplicate username must be rejected");
    assert!(
        err.as_database_error()
            .is_some_and(|e| e.is_unique_violation()),
        "rejection should be a unique-constraint violation, got: {}",
        err
    );

    let count_after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count_before, count_after);
    assert_eq!(db.count_users_named("carol").await.unwrap(), 1);
}

#[tokio::test]
async fn test_ids_are_storage_assigned_and_increasing() {
    let (db, _dir) = setup_test_db().await.unwrap();

    let a = db.create_user("a").await.unwrap();
    let b = db.create_user("b").await.unwrap();
    let c = db.create_user("c").await.unwrap();

    assert!(a.id < b.id);
    assert!(b.id < c.id);
}

#[tokio::test]
async fn test_list_users_empty() {
    let (db, _dir) = setup_test_db().await.unwrap();

    let users = db.list_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_concurrent_identical_creates_persist_one_row() {
    let (db, _dir) = setup_test_db().await.unwrap();
    let db = Arc::new(db);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let db = db.clone();
        handles.push(tokio::spawn(
            async move { db.create_user("race").await.is_ok() },
        ));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(db.count_users_named("race").await.unwrap(), 1);
}
