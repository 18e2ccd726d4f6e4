use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use crate::error::Result;
use crate::router;
use crate::store::Store;

pub struct Server {
    listener: TcpListener,
    store: Arc<Store>,
}

impl Server {
    pub async fn new(address: String, port: u16, store: Store) -> Result<Self> {
        let server = Self {
            listener: TcpListener::bind(format!("{}:{}", address, port)).await?,
            store: Arc::new(store),
        };

        Ok(server)
    }

    pub fn local_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn store(&self) -> Arc<Store> {
        Arc::clone(&self.store)
    }

    /// Serves until Ctrl+C (or SIGTERM), letting in-flight requests finish.
    pub async fn start(self) -> Result<()> {
        tracing::info!(addr = %self.local_addr()?, "Course API listening");

        axum::serve(self.listener, router(self.store))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C pressed, shutting down...");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, shutting down...");
        }
    }
}
