#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use driftwood_domain::timestamp::to_store;
use driftwood_infrastructure::database::MIGRATOR;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Values accepted by the `post_interactions.type` CHECK constraint.
#[derive(Debug, Clone, Copy)]
pub enum InteractionType {
    Like,
    Boost,
    Vote,
    Pin,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Boost => "boost",
            Self::Vote => "vote",
            Self::Pin => "pin",
        }
    }
}

/// In-memory databases are per connection, so the pool is pinned to one.
pub async fn create_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

pub fn uri(id: i64) -> String {
    format!("https://remote.example/notes/{}", id)
}

pub async fn insert_user(pool: &SqlitePool, id: i64, admin: bool) {
    sqlx::query("INSERT INTO users (id, email, admin) VALUES (?, ?, ?)")
        .bind(id)
        .bind(format!("user{}@social.example", id))
        .bind(admin as i64)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_identity(
    pool: &SqlitePool,
    id: i64,
    local: bool,
    user_id: Option<i64>,
    created: DateTime<Utc>,
) {
    let domain = if local { "social.example" } else { "remote.example" };
    sqlx::query(
        "INSERT INTO identities (id, username, domain, name, local, user_id, created)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(format!("user{}", id))
    .bind(domain)
    .bind(format!("User {}", id))
    .bind(local as i64)
    .bind(user_id)
    .bind(to_store(&created))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_post(
    pool: &SqlitePool,
    id: i64,
    object_uri: Option<&str>,
    local: bool,
    created: DateTime<Utc>,
    in_reply_to: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO posts (id, object_uri, local, in_reply_to, created) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(object_uri)
    .bind(local as i64)
    .bind(in_reply_to)
    .bind(to_store(&created))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_remote_post(pool: &SqlitePool, id: i64, age_days: i64) {
    insert_post(pool, id, Some(&uri(id)), false, days_ago(age_days), None).await;
}

pub async fn insert_interaction(
    pool: &SqlitePool,
    identity_id: i64,
    post_id: i64,
    kind: InteractionType,
) {
    sqlx::query("INSERT INTO post_interactions (identity_id, post_id, type) VALUES (?, ?, ?)")
        .bind(identity_id)
        .bind(post_id)
        .bind(kind.as_str())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_domain(pool: &SqlitePool, domain: &str, local: bool, blocked: bool) {
    sqlx::query("INSERT INTO domains (domain, local, blocked) VALUES (?, ?, ?)")
        .bind(domain)
        .bind(local as i64)
        .bind(blocked as i64)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
