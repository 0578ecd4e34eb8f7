mod config;
mod shutdown;
mod worker;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::warn;

use crate::config::ClientConfig;

#[derive(Parser)]
#[command(name = "potato-client", about = "Expert Potato worker client")]
struct Cli {
    /// Override sleep interval (seconds)
    #[arg(long)]
    interval: Option<u64>,

    /// Load config from a specific .env file
    #[arg(long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = ClientConfig::from_env_file(cli.config_file.as_deref())?;

    let interval = resolve_interval(&cli, &cfg)?;

    // Graceful shutdown: SIGINT + SIGTERM
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        match shutdown::shutdown_signal().await {
            Ok(()) => {
                shutdown_tx.send(true).ok();
            }
            Err(e) => warn!("Signal handlers unavailable, running until killed: {e}"),
        }
    });

    worker::run_worker(interval, shutdown_rx).await;
    Ok(())
}

/// `--interval` wins over the configured interval.
fn resolve_interval(cli: &Cli, cfg: &ClientConfig) -> Result<Duration> {
    let secs = cli.interval.unwrap_or(cfg.sleep_interval_secs);
    if secs == 0 {
        bail!("--interval must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
