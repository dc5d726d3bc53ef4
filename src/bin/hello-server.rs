//! hello-server entry point.
//!
//! Serves the plain-text greeting at `/hello` and the static asset tree
//! under `/assets/`. No time endpoints; see `time-server` for those.

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use timefeed::api;
use timefeed::config::ServerConfig;
use timefeed::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("loading configuration")?;
    tracing::info!(addr = %config.listen_addr, "starting hello-server");

    let server = Server::new(config);
    let app = api::site_router(server.config())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(server.app_state());

    let handle = server.start(app).await.context("starting server")?;

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    tracing::info!("shutdown signal received");
    handle.shutdown().await;

    Ok(())
}
