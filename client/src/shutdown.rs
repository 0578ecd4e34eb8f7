//! Termination signals for the worker loop.

use anyhow::Result;
use tracing::info;

/// Wait for SIGINT or SIGTERM.
#[cfg(unix)]
pub async fn shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => info!("STOP SIGNAL (Ctrl+C)"),
        _ = sigterm.recv() => info!("STOP SIGNAL (SIGTERM)"),
    }
    Ok(())
}

/// Wait for Ctrl+C.
#[cfg(not(unix))]
pub async fn shutdown_signal() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    info!("STOP SIGNAL (Ctrl+C)");
    Ok(())
}
