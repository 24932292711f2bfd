use crate::retention::RetentionPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetentionConfig {
    /// Days a remote post is kept before it becomes eligible for pruning.
    #[serde(default = "default_remote_prune_horizon_days")]
    pub remote_prune_horizon_days: u32,

    /// Maximum candidates considered by one pruning pass.
    #[serde(default = "default_prune_batch_size")]
    pub prune_batch_size: u32,

    /// Run pruning from inside `serve` instead of relying on an external
    /// scheduler calling `prune-posts`.
    #[serde(default)]
    pub scheduled_prune: bool,

    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
}

impl RetentionConfig {
    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy::from_days(self.remote_prune_horizon_days)
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            remote_prune_horizon_days: default_remote_prune_horizon_days(),
            prune_batch_size: default_prune_batch_size(),
            scheduled_prune: false,
            prune_interval_secs: default_prune_interval_secs(),
        }
    }
}

fn default_remote_prune_horizon_days() -> u32 {
    90
}

fn default_prune_batch_size() -> u32 {
    5000
}

fn default_prune_interval_secs() -> u64 {
    3600
}
