//! Fixed-rate pass scheduler
//!
//! Drives the reconciler once immediately and then once per configured
//! interval, for the lifetime of the process. Passes never overlap: the
//! timer skips missed ticks, and a tick that fires while a pass is still
//! running on the blocking pool fails the busy-flag exchange and is
//! dropped rather than queued.

use crate::config::SyncConfig;
use crate::logging::SyncLogger;
use crate::sync;
use crate::types::MiraError;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::MissedTickBehavior;

/// Run the scheduler until the process receives Ctrl-C.
pub async fn run(config: Arc<SyncConfig>, logger: Arc<SyncLogger>) -> Result<(), MiraError> {
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    run_with_shutdown(config, logger, shutdown).await
}

/// Run the scheduler until `shutdown` resolves.
///
/// Creates the replica root if absent before the first pass; failure to
/// create it is fatal. Shutdown stops scheduling new passes but does not
/// cancel a pass already in flight, which is awaited before returning.
pub async fn run_with_shutdown(
    config: Arc<SyncConfig>,
    logger: Arc<SyncLogger>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), MiraError> {
    if !config.replica.exists() {
        if let Err(e) = std::fs::create_dir_all(&config.replica) {
            logger.log(&format!("Error during program configuration {e}"));
            return Err(MiraError::Io(e));
        }
        logger.log("Created replica directory");
    }

    let pass: Arc<dyn Fn() + Send + Sync> = {
        let config = Arc::clone(&config);
        let logger = Arc::clone(&logger);
        Arc::new(move || {
            if let Err(e) = sync::run_pass(&config, &logger) {
                // Enumeration failure: the next tick retries
                logger.log(&format!("Error during synchronization {e}"));
            }
        })
    };

    drive(config.interval, shutdown, pass).await;

    Ok(())
}

/// Tick loop: run `pass` on the blocking pool once immediately and then
/// once per `period`, dropping any tick that fires while a pass is still
/// running, until `shutdown` resolves.
async fn drive(
    period: std::time::Duration,
    shutdown: impl Future<Output = ()>,
    pass: Arc<dyn Fn() + Send + Sync>,
) {
    // First tick fires immediately, then once per period
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let busy = Arc::new(AtomicBool::new(false));
    let mut in_flight: Option<tokio::task::JoinHandle<()>> = None;

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                // Fixed-rate dropping: a tick during a running pass is
                // discarded, never queued
                if busy
                    .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                    .is_err()
                {
                    continue;
                }

                let pass = Arc::clone(&pass);
                let busy_flag = Arc::clone(&busy);

                in_flight = Some(tokio::task::spawn_blocking(move || {
                    pass();
                    busy_flag.store(false, Ordering::Release);
                }));
            }
            _ = &mut shutdown => break,
        }
    }

    // No mid-pass cancellation; an in-progress pass may complete
    if let Some(handle) = in_flight.take() {
        let _ = handle.await;
    }
}
