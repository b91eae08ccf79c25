pub mod api;
pub mod authorization;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod kpi;
pub mod models;
pub mod validation;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::server::ServerError;
use crate::config::{AppConfig, ConfigError};
use crate::db::{SqliteStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("Signal handler failed: {0}")]
    Signal(std::io::Error),
}

/// Initialize tracing, open the database, serve until Ctrl-C.
pub async fn run() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;
    tracing::info!(path = %config.database_path.display(), "Opening database");
    let store = Arc::new(SqliteStore::open(&config.database_path)?);

    let bind_addr = config.bind_addr;
    let server = api::start_admin_api_server(store, Arc::new(config), bind_addr).await?;
    tracing::info!(addr = %server.session.server_addr, "Admin API listening");

    tokio::signal::ctrl_c().await.map_err(RunError::Signal)?;
    server.stop().await;

    Ok(())
}
