use driftwood_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    debug!(
        horizon_days = config.retention.remote_prune_horizon_days,
        batch_size = config.retention.prune_batch_size,
        "Configuration loaded"
    );
    Ok(config)
}
