use driftwood_application::ports::SilentProgress;
use driftwood_application::use_cases::PruneRemotePostsUseCase;
use driftwood_domain::{DomainError, PruneResult, RetentionPolicy};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically prunes old remote posts, one bounded batch per tick.
pub struct PrunePostsJob {
    prune: Arc<PruneRemotePostsUseCase>,
    policy: RetentionPolicy,
    batch_size: u32,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl PrunePostsJob {
    pub fn new(prune: Arc<PruneRemotePostsUseCase>, policy: RetentionPolicy, batch_size: u32) -> Self {
        Self {
            prune,
            policy,
            batch_size,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn run_once(&self) -> Result<PruneResult, DomainError> {
        let result = self
            .prune
            .execute(self.batch_size, &self.policy, &SilentProgress)
            .await;

        match &result {
            Ok(outcome) if outcome.is_idle() => {
                info!("Post pruning found nothing to delete");
            }
            Ok(outcome) => {
                info!(
                    considered = outcome.considered,
                    deleted = outcome.deleted,
                    "Post pruning completed"
                );
            }
            Err(e) => {
                error!(error = %e, "Post pruning failed");
            }
        }
        result
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            horizon_days = self.policy.horizon_days(),
            batch_size = self.batch_size,
            interval_secs = self.interval_secs,
            "Starting post pruning job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("PrunePostsJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let _ = self.run_once().await;
                    }
                }
            }
        });
    }
}
