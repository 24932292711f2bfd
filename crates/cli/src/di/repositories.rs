use driftwood_infrastructure::repositories::{SqliteInstanceRepository, SqlitePostRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub post: Arc<SqlitePostRepository>,
    pub instance: Arc<SqliteInstanceRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            post: Arc::new(SqlitePostRepository::new(pool.clone())),
            instance: Arc::new(SqliteInstanceRepository::new(pool)),
        }
    }
}
