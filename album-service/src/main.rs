//! album-service - In-memory album catalog over HTTP
//!
//! Serves CRUD endpoints under `/albums` plus `/health` and `/build_info`.
//! Default listen address is 127.0.0.1:8080.

use std::path::PathBuf;

use album_common::config::{ConfigOverrides, ServiceConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for album-service
#[derive(Parser, Debug)]
#[command(name = "album-service")]
#[command(about = "In-memory album catalog HTTP service")]
#[command(version)]
struct Args {
    /// Host to listen on
    #[arg(long, env = "ALBUM_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ALBUM_PORT")]
    port: Option<u16>,

    /// TOML config file
    #[arg(short, long, env = "ALBUM_CONFIG")]
    config: Option<PathBuf>,

    /// Start with an empty collection instead of the seed albums
    #[arg(long)]
    no_seed: bool,

    /// Log level for this service and the HTTP layer (RUST_LOG wins when set)
    #[arg(long, env = "ALBUM_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            seed: self.no_seed.then_some(false),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServiceConfig::resolve(&args.overrides(), args.config.as_deref())
        .context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "album_service={level},album_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before anything else can stall
    info!(
        "Starting album-service v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!(
        "Configuration: bind {}, seed {}, log level {}",
        config.bind_addr(),
        config.seed,
        config.log_level
    );

    album_service::server::run(&config)
        .await
        .context("album-service terminated")?;

    Ok(())
}
