//! HTTP API layer: route handlers, static assets, and router composition.
//!
//! All endpoints are mounted at the root. The surface is fixed by contract:
//! greeting, time poll, WebSocket upgrade, static assets, and nothing else.

pub mod assets;
pub mod handlers;

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::ws;

/// OpenAPI document for the REST endpoints.
///
/// The document is generated only; no docs route is mounted because the
/// HTTP surface is fixed by contract.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(handlers::greeting::hello, handlers::time::get_time),
    tags(
        (name = "Site", description = "Static demo site endpoints"),
        (name = "Time", description = "Current-time endpoints"),
    )
)]
pub struct ApiDoc;

/// Routes shared by both demo servers: the greeting and static assets.
pub fn site_router(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(handlers::greeting::routes())
        .merge(assets::routes(&config.assets_dir))
}

/// The full surface: greeting, time poll, WebSocket push, static assets.
pub fn build_router(config: &ServerConfig) -> Router<AppState> {
    site_router(config)
        .merge(handlers::time::routes())
        .route("/ws", get(ws::handler::ws_handler))
}
