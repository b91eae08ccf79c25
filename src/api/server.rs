//! Admin API server lifecycle: starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::router::admin_api_router;
use crate::config::AppConfig;
use crate::db::UserStore;

/// Session metadata for a running admin API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind admin API server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Failed to get server address: {0}")]
    LocalAddr(std::io::Error),
}

/// Handle to a running admin API server.
pub struct AdminApiServer {
    pub session: ApiSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl AdminApiServer {
    /// Send the shutdown signal without waiting.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Admin API server shutdown signal sent");
        }
    }

    /// Shut down and wait for in-flight requests to finish.
    pub async fn stop(mut self) {
        self.shutdown();
        if let Err(e) = (&mut self.task).await {
            tracing::error!("Admin API server task failed: {e}");
        }
    }
}

/// Start the admin API server on `addr` (port 0 picks an ephemeral port).
pub async fn start_admin_api_server<S: UserStore>(
    store: Arc<S>,
    config: Arc<AppConfig>,
    addr: SocketAddr,
) -> Result<AdminApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    tracing::info!(%addr, "Admin API server binding");

    let app = admin_api_router(store, config);

    let session = ApiSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Admin API server received shutdown signal");
        };

        tracing::info!(%addr, "Admin API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Admin API server error: {e}");
        }

        tracing::info!("Admin API server stopped");
    });

    Ok(AdminApiServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    use crate::db::SqliteStore;

    fn loopback() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    fn test_config() -> Arc<AppConfig> {
        Arc::new(AppConfig::from_lookup(|_| None).unwrap())
    }

    #[tokio::test]
    async fn server_starts_on_ephemeral_port() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let server = start_admin_api_server(store, test_config(), loopback())
            .await
            .unwrap();

        assert!(server.session.port > 0);
        assert!(server.session.server_addr.starts_with("127.0.0.1:"));
        assert!(!server.session.session_id.is_empty());

        server.stop().await;
    }

    #[tokio::test]
    async fn health_reachable_over_tcp() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let server = start_admin_api_server(store, test_config(), loopback())
            .await
            .unwrap();

        let mut stream = tokio::net::TcpStream::connect(&server.session.server_addr)
            .await
            .unwrap();
        stream
            .write_all(b"GET /api/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("\"status\":\"ok\""));

        server.stop().await;
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let first = start_admin_api_server(store.clone(), test_config(), loopback())
            .await
            .unwrap();
        let taken: SocketAddr = first.session.server_addr.parse().unwrap();

        let err = start_admin_api_server(store, test_config(), taken)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));

        first.stop().await;
    }
}
