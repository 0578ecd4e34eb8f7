use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

/// Run the worker loop until `shutdown` flips to `true`.
///
/// Logs one startup record, then sleeps `interval` per iteration with no
/// further output. Without a shutdown signal this never returns.
pub async fn run_worker(interval: Duration, mut shutdown: watch::Receiver<bool>) {
    info!("Client running..");

    loop {
        if *shutdown.borrow() {
            break;
        }
        if !sleep_or_shutdown(&mut shutdown, interval).await {
            break;
        }
    }

    info!("Exit...");
}

/// Sleep for `interval` or return false if shutdown signal received.
/// A dropped sender means no signal can ever arrive, so keep sleeping.
async fn sleep_or_shutdown(rx: &mut watch::Receiver<bool>, interval: Duration) -> bool {
    let stop = async {
        let signalled = rx.wait_for(|flag| *flag).await.is_ok();
        if !signalled {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = tokio::time::sleep(interval) => true,
        _ = stop => false,
    }
}
