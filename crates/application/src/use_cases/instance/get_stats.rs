use crate::ports::InstanceRepository;
use crate::services::ResultCache;
use driftwood_domain::{DomainError, InstanceStats};
use std::sync::Arc;
use std::time::Duration;

const STATS_CACHE_KEY: &str = "instance_info_stats";
const STATS_TTL: Duration = Duration::from_secs(300);

/// Local user/status/domain counters. Expensive to compute, so they are
/// cached for five minutes.
pub struct GetInstanceStatsUseCase {
    repository: Arc<dyn InstanceRepository>,
    cache: ResultCache<InstanceStats>,
}

impl GetInstanceStatsUseCase {
    pub fn new(repository: Arc<dyn InstanceRepository>) -> Self {
        Self {
            repository,
            cache: ResultCache::new(),
        }
    }

    pub async fn execute(&self) -> Result<InstanceStats, DomainError> {
        self.cache
            .get_or_refresh(STATS_CACHE_KEY, STATS_TTL, || async {
                let (users, statuses, domains) = tokio::join!(
                    self.repository.count_local_identities(),
                    self.repository.count_local_visible_posts(),
                    self.repository.count_domains()
                );
                Ok::<_, DomainError>(InstanceStats {
                    user_count: users?,
                    status_count: statuses?,
                    domain_count: domains?,
                })
            })
            .await
    }
}
