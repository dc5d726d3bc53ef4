//! # timefeed
//!
//! Two small HTTP demo servers built on the same library:
//!
//! - `hello-server` serves a plain-text greeting and a static asset tree.
//! - `time-server` adds the current server time, both as a pollable REST
//!   endpoint and as a WebSocket feed that pushes a fresh timestamp on a
//!   fixed period.
//!
//! Timestamps are formatted in a single fixed layout
//! (`Tue Jan 02 15:04:05 UTC 2024`) and JSON-encoded as strings, so the
//! polled and pushed values are interchangeable on the client side.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST handlers (api/)     /hello /time /assets
//!     ├── WS upgrade (ws/handler)  /ws
//!     │       └── push loop (ws/push), one task per connection
//!     │
//!     ├── clock (fixed-layout timestamps)
//!     └── server (bind / serve / graceful shutdown)
//! ```

pub mod api;
pub mod app_state;
pub mod clock;
pub mod config;
pub mod error;
pub mod server;
pub mod ws;
