use driftwood_infrastructure::database::MIGRATOR;
use sqlx::SqlitePool;
use std::process::ExitCode;
use tracing::info;

/// Schema migrations already ran while opening the pool; this reports them.
pub async fn run(pool: SqlitePool) -> anyhow::Result<ExitCode> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or(0);
    info!(version = latest, "Database schema is current");
    pool.close().await;
    Ok(ExitCode::SUCCESS)
}
