use driftwood_domain::config::DatabaseConfig;
use driftwood_infrastructure::database::{create_pool, database_url, run_migrations};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let url = database_url(&cfg.path);
    info!("Initializing database: {}", url);

    let pool = create_pool(&url, cfg).await.map_err(|e| {
        error!("Failed to open database: {}", e);
        anyhow::anyhow!(e)
    })?;

    run_migrations(&pool).await.map_err(|e| {
        error!("Failed to migrate database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
