//! Periodic timestamp push loop.
//!
//! The closest thing this system has to a core: one task per accepted
//! connection, sending the formatted current time as a JSON-encoded string
//! on a fixed period until the connection goes away.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::clock;

/// Runs the push loop for a single connection until it terminates.
///
/// The task owns the socket exclusively, so writes are strictly
/// sequential: one write completes (or fails) before the next tick's write
/// begins. The first timestamp goes out immediately, then one per period;
/// missed ticks are skipped, not bursted. There is no timeout on the write
/// itself and no backpressure handling.
///
/// The loop terminates when a write fails, when the peer closes or the
/// read half ends, or when `shutdown` fires. Returning drops the socket,
/// which closes the connection, so task and connection lifetimes are
/// bounded and map 1:1.
pub async fn run(socket: WebSocket, period: Duration, shutdown: CancellationToken) {
    let conn_id = uuid::Uuid::new_v4();
    tracing::info!(%conn_id, "websocket client connected");

    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            () = shutdown.cancelled() => {
                tracing::debug!(%conn_id, "push loop cancelled");
                break;
            }
            inbound = ws_rx.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::debug!(%conn_id, "client closed connection");
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::warn!(%conn_id, error = %e, "websocket read failed");
                        break;
                    }
                    // No client-to-server messages are defined; drain and ignore.
                    Some(Ok(_)) => {}
                }
            }
            _ = ticker.tick() => {
                let stamp = clock::now_string();
                let payload = match serde_json::to_string(&stamp) {
                    Ok(payload) => payload,
                    Err(e) => {
                        tracing::error!(%conn_id, error = %e, "timestamp encode failed");
                        continue;
                    }
                };
                if let Err(e) = ws_tx.send(Message::text(payload)).await {
                    tracing::warn!(%conn_id, error = %e, "write failed, ending push loop");
                    break;
                }
            }
        }
    }

    tracing::info!(%conn_id, "push loop terminated");
}
