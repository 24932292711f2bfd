pub mod database;
pub mod errors;
pub mod instance;
pub mod logging;
pub mod retention;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use instance::InstanceConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use retention::RetentionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
