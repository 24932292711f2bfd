use chrono::{DateTime, Duration, Utc};
use driftwood_application::ports::SilentProgress;
use driftwood_application::use_cases::PruneRemotePostsUseCase;
use driftwood_domain::timestamp::to_store;
use driftwood_domain::{PruneResult, RetentionPolicy};
use driftwood_infrastructure::database::MIGRATOR;
use driftwood_infrastructure::repositories::SqlitePostRepository;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

const HORIZON_DAYS: u32 = 90;

async fn create_store() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    sqlx::query(
        "INSERT INTO identities (id, username, domain, local, created) VALUES
         (1, 'alice', 'social.example', 1, '2020-01-01 00:00:00'),
         (2, 'bob', 'remote.example', 0, '2020-01-01 00:00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool
}

fn note(id: i64) -> String {
    format!("https://remote.example/notes/{}", id)
}

fn aged(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

async fn insert_remote(pool: &SqlitePool, id: i64, created: DateTime<Utc>, in_reply_to: Option<i64>) {
    sqlx::query("INSERT INTO posts (id, object_uri, local, in_reply_to, created) VALUES (?, ?, 0, ?, ?)")
        .bind(id)
        .bind(note(id))
        .bind(in_reply_to.map(note))
        .bind(to_store(&created))
        .execute(pool)
        .await
        .unwrap();
}

async fn remaining_ids(pool: &SqlitePool) -> Vec<i64> {
    sqlx::query_as::<_, (i64,)>("SELECT id FROM posts ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|(id,)| id)
        .collect()
}

async fn prune(pool: &SqlitePool, limit: u32) -> PruneResult {
    let repo = Arc::new(SqlitePostRepository::new(pool.clone()));
    PruneRemotePostsUseCase::new(repo)
        .execute(limit, &RetentionPolicy::from_days(HORIZON_DAYS), &SilentProgress)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_lone_old_remote_post_is_deleted() {
    let pool = create_store().await;
    insert_remote(&pool, 1, aged(120), None).await;

    let result = prune(&pool, 10).await;

    assert_eq!(result.considered, 1);
    assert_eq!(result.deleted, 1);
    assert!(!result.is_idle());
    assert!(remaining_ids(&pool).await.is_empty());
}

#[tokio::test]
async fn test_replied_parent_survives_while_reply_goes() {
    let pool = create_store().await;
    insert_remote(&pool, 1, aged(120), None).await;
    insert_remote(&pool, 2, aged(110), Some(1)).await;

    let result = prune(&pool, 10).await;

    assert_eq!(result.considered, 2);
    assert_eq!(result.deleted, 1);
    assert_eq!(remaining_ids(&pool).await, vec![1]);

    let second = prune(&pool, 10).await;
    assert_eq!(second.deleted, 1);
    assert!(remaining_ids(&pool).await.is_empty());
}

#[tokio::test]
async fn test_locally_touched_post_is_never_a_candidate() {
    let pool = create_store().await;
    insert_remote(&pool, 1, aged(120), None).await;
    sqlx::query("INSERT INTO post_interactions (identity_id, post_id, type) VALUES (1, 1, 'like')")
        .execute(&pool)
        .await
        .unwrap();

    let result = prune(&pool, 10).await;

    assert_eq!(result.considered, 0);
    assert_eq!(result.deleted, 0);
    assert!(result.is_idle());
    assert_eq!(remaining_ids(&pool).await, vec![1]);
}

#[tokio::test]
async fn test_remote_interaction_does_not_protect() {
    let pool = create_store().await;
    insert_remote(&pool, 1, aged(120), None).await;
    sqlx::query("INSERT INTO post_interactions (identity_id, post_id, type) VALUES (2, 1, 'boost')")
        .execute(&pool)
        .await
        .unwrap();

    let result = prune(&pool, 10).await;

    assert_eq!(result.deleted, 1);
    let (interactions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM post_interactions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(interactions, 0);
}

#[tokio::test]
async fn test_batch_limit_takes_oldest_first() {
    let pool = create_store().await;
    let base = aged(200);
    let mut tx = pool.begin().await.unwrap();
    for id in 1..=7000i64 {
        sqlx::query("INSERT INTO posts (id, object_uri, local, created) VALUES (?, ?, 0, ?)")
            .bind(id)
            .bind(note(id))
            .bind(to_store(&(base + Duration::minutes(id))))
            .execute(&mut *tx)
            .await
            .unwrap();
    }
    tx.commit().await.unwrap();

    let result = prune(&pool, 5000).await;

    assert_eq!(result.considered, 5000);
    assert_eq!(result.deleted, 5000);
    let remaining = remaining_ids(&pool).await;
    assert_eq!(remaining.len(), 2000);
    assert_eq!(remaining.first(), Some(&5001));

    let second = prune(&pool, 5000).await;
    assert_eq!(second.considered, 2000);
    assert!(remaining_ids(&pool).await.is_empty());
}

#[tokio::test]
async fn test_local_and_recent_posts_survive() {
    let pool = create_store().await;
    insert_remote(&pool, 1, aged(10), None).await;
    sqlx::query("INSERT INTO posts (id, object_uri, local, created) VALUES (2, 'https://social.example/posts/2', 1, ?)")
        .bind(to_store(&aged(400)))
        .execute(&pool)
        .await
        .unwrap();

    let result = prune(&pool, 10).await;

    assert!(result.is_idle());
    assert_eq!(remaining_ids(&pool).await, vec![1, 2]);
}
