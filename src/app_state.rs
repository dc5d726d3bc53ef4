//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// There is no connection registry and no shared mutable state: the
/// configuration is immutable and the token is only observed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable server configuration.
    pub config: Arc<ServerConfig>,
    /// Root shutdown token; each push loop watches a child of it.
    pub shutdown: CancellationToken,
}
