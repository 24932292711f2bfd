use clap::{Parser, Subcommand};
use driftwood_domain::CliOverrides;
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "driftwood")]
#[command(version)]
#[command(about = "Driftwood - federated server maintenance and instance API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Delete old remote posts that nothing local depends on
    PrunePosts {
        /// Maximum number of posts to consider in this run
        #[arg(
            short = 'n',
            long,
            default_value_t = 5000,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        number: u32,
    },

    /// Run the instance API (and scheduled pruning when enabled)
    Serve {
        /// Web server port
        #[arg(short = 'w', long, visible_alias = "port")]
        web_port: Option<u16>,

        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },

    /// Create or upgrade the database schema
    Migrate,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (web_port, bind_address) = match &self.command {
            Command::Serve { web_port, bind } => (*web_port, bind.clone()),
            _ => (None, None),
        };
        CliOverrides {
            web_port,
            bind_address,
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging);

    info!("Driftwood v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    match cli.command {
        Command::PrunePosts { number } => commands::prune_posts::run(&config, pool, number).await,
        Command::Serve { .. } => commands::serve::run(&config, pool).await,
        Command::Migrate => commands::migrate::run(pool).await,
    }
}
