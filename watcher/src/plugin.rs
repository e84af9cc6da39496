//! Plugin entry point.
//!
//! The host calls [`WatcherPlugin::initialize`] once at startup with the bus
//! it publishes deploy notifications into.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::services::deploy_ingestor::DeployIngestor;
use crate::services::deploy_watcher::spawn_deploy_watcher;
use crate::services::event_bus::EventBus;
use crate::services::mod_file_service::PgModFileStore;
use crate::storage::filesystem::FilesystemRepository;
use crate::telemetry;

/// A running watcher plugin
pub struct WatcherPlugin {
    pool: PgPool,
    watcher: JoinHandle<()>,
}

impl WatcherPlugin {
    /// Connect to the database, migrate it and start watching `bus`.
    pub async fn initialize(config: &Config, bus: &EventBus) -> Result<Self> {
        telemetry::init_tracing();
        tracing::info!("");
        tracing::info!("--- Watcher Plugin");

        let pool = db::create_pool(config).await?;
        db::migrate(&pool).await?;
        tracing::info!("Connected to mod file database");

        let lookup = Arc::new(FilesystemRepository::new(config.repository_root.clone()));
        let store = Arc::new(PgModFileStore::new(pool.clone()));
        let ingestor = Arc::new(DeployIngestor::new(lookup, store));

        let watcher = spawn_deploy_watcher(bus, ingestor);
        tracing::info!(
            repository_root = %config.repository_root.display(),
            "Watching for deployed mod jars"
        );

        Ok(Self { pool, watcher })
    }

    /// Database pool shared with the watcher.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Stop watching and close the database pool.
    pub async fn shutdown(self) {
        self.watcher.abort();
        let _ = self.watcher.await;
        self.pool.close().await;
    }
}
