//! Server lifecycle: bind, serve, shut down.
//!
//! [`Server`] owns the configuration and the root [`CancellationToken`];
//! [`Server::start`] binds the listener and returns a [`ServerHandle`]
//! through which the caller learns the bound address and triggers
//! shutdown. Push loops hold child tokens of the root, so cancelling the
//! handle ends every open websocket and lets the accept loop drain.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::app_state::AppState;
use crate::config::ServerConfig;

/// A configured server that has not yet bound its listener.
#[derive(Debug)]
pub struct Server {
    config: Arc<ServerConfig>,
    shutdown: CancellationToken,
}

impl Server {
    /// Creates a server from a configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            shutdown: CancellationToken::new(),
        }
    }

    /// Returns the configuration this server was built with.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the state handed to request handlers.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState {
            config: Arc::clone(&self.config),
            shutdown: self.shutdown.clone(),
        }
    }

    /// Binds the configured address and starts serving `app`.
    ///
    /// Returns once the listener is bound; requests are served on a
    /// background task until the returned handle is shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address cannot be bound.
    pub async fn start(self, app: Router) -> std::io::Result<ServerHandle> {
        let listener = tokio::net::TcpListener::bind(self.config.listen_addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(addr = %local_addr, "server listening");

        let shutdown = self.shutdown.clone();
        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(self.shutdown.cancelled_owned())
                .await;
            if let Err(e) = result {
                tracing::error!(error = %e, "server terminated abnormally");
            }
        });

        Ok(ServerHandle {
            local_addr,
            shutdown,
            task,
        })
    }
}

/// Handle to a running server.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// The address the listener actually bound, with any ephemeral port
    /// resolved.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections, ends all push loops, and waits for
    /// the serve task to finish.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "serve task failed to join");
        }
    }
}
