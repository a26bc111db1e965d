//! Route table watcher for hot reload.
//!
//! # Data Flow
//! ```text
//! notify event (modify/create)
//!     → debounce thread (wait for a quiet period, drain the burst)
//!     → reload(): read → parse/validate → into_registry
//!     → SharedRegistry::replace
//!     → published snapshot sent to the update channel
//! ```
//!
//! # Design Decisions
//! - Editors and `fs::write` truncate before writing; a blank file is
//!   treated as a write in progress, never as an empty table
//! - A reload that would drop every route is refused while routes exist
//! - Any failed reload keeps the current table

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{mpsc as std_mpsc, Arc};
use std::thread;
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::{parse_config, ConfigError};
use crate::routing::{RouteRegistry, SharedRegistry};

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Watches the route table file and republishes it into a shared registry.
pub struct ConfigWatcher {
    path: PathBuf,
    shared: Arc<SharedRegistry>,
    quiet_period: Duration,
    update_tx: mpsc::UnboundedSender<Arc<RouteRegistry>>,
}

impl ConfigWatcher {
    /// Create a watcher that republishes into `shared`.
    ///
    /// Returns the watcher and a receiver of every registry it publishes.
    pub fn new(
        path: &Path,
        shared: Arc<SharedRegistry>,
    ) -> (Self, mpsc::UnboundedReceiver<Arc<RouteRegistry>>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                shared,
                quiet_period: DEFAULT_QUIET_PERIOD,
                update_tx,
            },
            update_rx,
        )
    }

    /// How long the file must stay unchanged before it is reloaded.
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    /// Reload the file once and publish it if it yields a usable table.
    ///
    /// Returns `Ok(None)` when the file is blank or would empty a populated
    /// table; the current registry stays in place.
    pub fn reload(&self) -> Result<Option<Arc<RouteRegistry>>, ConfigError> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            tracing::debug!(path = ?self.path, "Route table file is blank, waiting for write");
            return Ok(None);
        }

        let registry = parse_config(&content)?.into_registry()?;
        if registry.is_empty() && self.shared.load().has_routes() {
            tracing::warn!(
                path = ?self.path,
                "Reloaded route table has no routes, keeping current"
            );
            return Ok(None);
        }

        self.shared.replace(registry);
        Ok(Some(self.shared.load()))
    }

    /// Start watching the file.
    ///
    /// Events are debounced on a background thread. The returned watcher
    /// must be kept alive; dropping it stops the thread and closes the
    /// update channel.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let (event_tx, event_rx) = std_mpsc::channel::<()>();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    let _ = event_tx.send(());
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Watch error: {:?}", e),
            }
        })?;
        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Route table watcher started");

        thread::Builder::new()
            .name("route-table-watcher".into())
            .spawn(move || self.debounce_loop(event_rx))
            .map_err(notify::Error::io)?;

        Ok(watcher)
    }

    fn debounce_loop(self, events: std_mpsc::Receiver<()>) {
        while events.recv().is_ok() {
            loop {
                match events.recv_timeout(self.quiet_period) {
                    Ok(()) => continue,
                    Err(std_mpsc::RecvTimeoutError::Timeout) => break,
                    Err(std_mpsc::RecvTimeoutError::Disconnected) => return,
                }
            }

            tracing::info!(path = ?self.path, "Route table change detected, reloading...");
            match self.reload() {
                Ok(Some(registry)) => {
                    if self.update_tx.send(registry).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Failed to reload routes: {}. Keeping current route table.", e);
                }
            }
        }
    }
}
