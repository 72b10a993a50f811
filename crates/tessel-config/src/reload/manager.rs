use crate::schema::TesselConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use tessel_common::ConfigError;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Publishes freshly loaded settings whenever the settings file changes.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Load the initial settings and start watching for changes in a
    /// background task.
    ///
    /// A missing or broken file yields defaults; the receiver gets every
    /// later successful reload.
    pub async fn start(config_path: PathBuf) -> (TesselConfig, watch::Receiver<TesselConfig>) {
        let manager = Self::new(config_path);
        let initial = match manager.reload_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load settings: {e}, using defaults");
                TesselConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial.clone());
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    /// Read and validate the settings file.
    pub fn reload_config(&self) -> Result<TesselConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<TesselConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create settings watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("settings watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading settings from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all settings receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("settings reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("settings watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("settings watcher channel closed");
                    break;
                }
            }
        }
    }
}
