use crate::di::{Repositories, UseCases};
use crate::server;
use driftwood_api::AppState;
use driftwood_domain::Config;
use driftwood_jobs::{JobRunner, PrunePostsJob};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run(config: &Config, pool: SqlitePool) -> anyhow::Result<ExitCode> {
    let repos = Repositories::new(pool);
    let use_cases = UseCases::new(&repos, &config.instance);
    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    if config.retention.scheduled_prune {
        runner = runner.with_prune_posts(
            PrunePostsJob::new(
                use_cases.prune_remote_posts.clone(),
                config.retention.policy(),
                config.retention.prune_batch_size,
            )
            .with_interval(config.retention.prune_interval_secs),
        );
    } else {
        info!("Scheduled post pruning disabled");
    }
    runner.start().await;

    let app_state = AppState {
        instance: Arc::new(config.instance.clone()),
        get_stats: use_cases.get_stats,
        get_activity: use_cases.get_activity,
        get_peers: use_cases.get_peers,
        get_languages: use_cases.get_languages,
        describe_instance: use_cases.describe_instance,
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let result = server::start_web_server(web_addr, app_state).await;
    shutdown.cancel();
    result?;

    info!("Server shutdown complete");
    Ok(ExitCode::SUCCESS)
}
