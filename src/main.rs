//! Board Dev Server
//!
//! Mock API and asset proxy for local board development.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │               BOARD DEV SERVER               │
//!   Browser           │                                              │
//!   ──────────────────┼─▶ http server ─▶ routing::dispatch           │
//!                     │                     │                        │
//!                     │        /wuffle/*    │    everything else     │
//!                     │             ▼       │         ▼              │
//!                     │     mock::handlers  │  proxy::forwarder ─────┼──▶ Asset Server
//!                     │     (MockDataset)   │  (routing::rewrite)    │    (bundler)
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use board_dev_server::config::{load_config, validate_config, ConfigError, DevServerConfig};
use board_dev_server::lifecycle::{shutdown_on_signal, Shutdown};
use board_dev_server::observability::{init_logging, metrics};
use board_dev_server::{DevServer, MockDataset};

#[derive(Parser)]
#[command(name = "board-dev-server")]
#[command(about = "Mock API and asset proxy for local board development", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file.
    #[arg(short, long)]
    bind: Option<String>,

    /// Asset Server origin, overrides the config file.
    #[arg(short, long)]
    upstream: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<DevServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => DevServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(upstream) = self.upstream {
            config.upstream.origin = upstream;
        }
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability.log_level)?;

    tracing::info!("board-dev-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.origin,
        max_move_body_bytes = config.mock.max_move_body_bytes,
        "Configuration loaded"
    );

    let dataset = MockDataset::new();
    dataset.validate()?;
    tracing::info!(
        columns = dataset.board.columns.len(),
        cards = dataset.card_count(),
        "Mock dataset ready"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    shutdown_on_signal(shutdown.clone());

    let server = DevServer::new(config, dataset);
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
