//! Periodic background refresh of the item collection.
//!
//! The sync loop keeps an in-memory snapshot of every item, refreshed on
//! a fixed interval and on demand. Readers get the snapshot without
//! touching the database; a failed refresh keeps the previous snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{mpsc, watch, RwLock};
use tokio::task::{self, JoinHandle};
use tokio::time::{interval, Duration};

use super::Tracker;
use crate::{db::Database, models::Item};

/// Handle to a running background sync task.
pub struct SyncLoop {
    snapshot: Arc<RwLock<Vec<Item>>>,
    refresh_tx: mpsc::Sender<()>,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Tracker {
    /// Spawns a background task that refreshes the item snapshot every
    /// `period`, starting with an immediate fetch.
    pub fn spawn_sync(&self, period: Duration) -> SyncLoop {
        SyncLoop::spawn(self.db_path.clone(), period)
    }
}

impl SyncLoop {
    fn spawn(db_path: PathBuf, period: Duration) -> Self {
        let snapshot = Arc::new(RwLock::new(Vec::new()));
        let (refresh_tx, mut refresh_rx) = mpsc::channel(8);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let loop_snapshot = Arc::clone(&snapshot);
        let handle = tokio::spawn(async move {
            // The first tick fires immediately, populating the snapshot
            // before the first full period elapses.
            let mut ticker = interval(period);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        Self::refresh_snapshot(&db_path, &loop_snapshot).await;
                    }
                    Some(()) = refresh_rx.recv() => {
                        Self::refresh_snapshot(&db_path, &loop_snapshot).await;
                    }
                    _ = shutdown_rx.changed() => {
                        log::info!("Sync loop shutting down");
                        break;
                    }
                }
            }
        });

        Self {
            snapshot,
            refresh_tx,
            shutdown_tx,
            handle,
        }
    }

    async fn refresh_snapshot(db_path: &Path, snapshot: &Arc<RwLock<Vec<Item>>>) {
        let path = db_path.to_path_buf();
        let fetched = task::spawn_blocking(move || {
            let db = Database::new(&path)?;
            db.get_items()
        })
        .await;

        match fetched {
            Ok(Ok(items)) => {
                log::debug!("Sync refresh fetched {} items", items.len());
                *snapshot.write().await = items;
            }
            Ok(Err(e)) => log::warn!("Sync refresh failed, keeping previous snapshot: {e}"),
            Err(e) => log::warn!("Sync refresh task failed: {e}"),
        }
    }

    /// Returns a copy of the current snapshot.
    pub async fn items(&self) -> Vec<Item> {
        self.snapshot.read().await.clone()
    }

    /// Requests an immediate refresh ahead of the next scheduled tick.
    pub async fn refresh(&self) {
        let _ = self.refresh_tx.send(()).await;
    }

    /// Stops the background task and waits for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.handle.await;
    }
}
