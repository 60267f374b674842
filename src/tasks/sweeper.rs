//! Expiration Sweeper
//!
//! Background task that periodically purges expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Smallest interval the sweeper will run at.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Sweeper ==
/// Handle to the background purge loop.
///
/// The loop stops when [`Sweeper::shutdown`] is called or when the handle is
/// dropped, whichever comes first.
#[derive(Debug)]
pub struct Sweeper {
    /// Sends `true` to stop the loop
    shutdown_tx: watch::Sender<bool>,
    /// Task handle, taken on shutdown
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Sweeper {
    /// Spawns the purge loop for `store`.
    ///
    /// The first pass runs one full `interval` after spawning.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn(store: Arc<CacheStore>, interval: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let interval = interval.max(MIN_SWEEP_INTERVAL);
        let handle = tokio::spawn(Self::run(store, interval, shutdown_rx));

        Self {
            shutdown_tx,
            handle: Mutex::new(Some(handle)),
        }
    }

    async fn run(
        store: Arc<CacheStore>,
        interval: Duration,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        info!("Starting expiration sweeper with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.purge_expired().await;
                    if removed > 0 {
                        info!("Sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Sweep: no expired entries found");
                    }
                }
                changed = shutdown_rx.changed() => {
                    // A dropped sender also ends the loop
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Expiration sweeper stopped");
    }

    // == Shutdown ==
    /// Signals the loop to stop and waits for it to finish.
    ///
    /// Calling this more than once is a no-op.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);

        if let Some(handle) = self.handle.lock().await.take() {
            if let Err(err) = handle.await {
                warn!("Expiration sweeper ended abnormally: {}", err);
            }
        }
    }

    /// Returns true once the loop has exited.
    pub async fn is_finished(&self) -> bool {
        match self.handle.lock().await.as_ref() {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
