//! Server configuration loaded from environment variables.
//!
//! The demo constants (port 8080, 3-second push period, 1024-byte WebSocket
//! buffers, `./assets`) live in [`ServerConfig::default`]; every value can
//! be overridden through the environment (or a `.env` file via `dotenvy`)
//! so tests can run with ephemeral ports and short push intervals.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

/// Top-level server configuration.
///
/// Loaded once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    /// Port 0 requests an ephemeral port.
    pub listen_addr: SocketAddr,

    /// Directory served under `/assets/`.
    pub assets_dir: PathBuf,

    /// Period between two timestamp pushes on a WebSocket connection.
    pub push_interval: Duration,

    /// WebSocket buffer bound: caps the write buffer and the maximum
    /// accepted inbound message size.
    pub ws_buffer_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            assets_dir: PathBuf::from("./assets"),
            push_interval: Duration::from_secs(3),
            ws_buffer_bytes: 1024,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Recognized keys: `LISTEN_ADDR`, `ASSETS_DIR`, `PUSH_INTERVAL_MS`,
    /// `WS_BUFFER_BYTES`. Falls back to the demo defaults when a variable
    /// is not set. Calls `dotenvy::dotenv().ok()` to optionally load a
    /// `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`], or if `PUSH_INTERVAL_MS` is zero (a zero-period
    /// ticker is invalid).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| defaults.listen_addr.to_string())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let push_interval_ms: u64 = parse_env("PUSH_INTERVAL_MS", 3_000);
        if push_interval_ms == 0 {
            anyhow::bail!("PUSH_INTERVAL_MS must be positive");
        }

        let ws_buffer_bytes = parse_env("WS_BUFFER_BYTES", defaults.ws_buffer_bytes);

        Ok(Self {
            listen_addr,
            assets_dir,
            push_interval: Duration::from_millis(push_interval_ms),
            ws_buffer_bytes,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
