use driftwood_domain::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match cfg.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
