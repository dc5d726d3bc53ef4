//! WebSocket layer: upgrade gating and the periodic push loop.
//!
//! The endpoint at `/ws` is one-way: after a same-origin check and the
//! protocol upgrade, the server pushes the current timestamp to the client
//! on a fixed period. No client-to-server messages are defined.

pub mod handler;
pub mod push;
