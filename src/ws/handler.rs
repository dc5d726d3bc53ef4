//! Axum WebSocket upgrade handler with same-origin gating.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::http::{HeaderMap, header};
use axum::response::Response;

use super::push;
use crate::app_state::AppState;
use crate::error::ServerError;

/// `GET /ws` — Upgrade the connection and start a timestamp push loop.
///
/// The declared request origin must exactly equal the scheme-qualified
/// host being served (`http://` + `Host`). This is a coarse cross-site
/// request guard, not a security boundary against spoofed headers.
///
/// # Errors
///
/// Returns [`ServerError::OriginNotAllowed`] on an origin mismatch (judged
/// before handshake validity, so a plain browser request gets 403) and
/// [`ServerError::UpgradeRejected`] when the request is not a valid
/// WebSocket handshake. No task is spawned in either case.
pub async fn ws_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Result<Response, ServerError> {
    if !same_origin(&headers) {
        return Err(ServerError::OriginNotAllowed);
    }
    let ws = ws.map_err(|rejection| ServerError::UpgradeRejected(rejection.to_string()))?;

    let period = state.config.push_interval;
    let shutdown = state.shutdown.child_token();

    Ok(ws
        .write_buffer_size(state.config.ws_buffer_bytes)
        .max_message_size(state.config.ws_buffer_bytes)
        .on_upgrade(move |socket| push::run(socket, period, shutdown)))
}

/// Returns `true` when the request's `Origin` header exactly equals the
/// scheme-qualified `Host`. An absent header never matches.
fn same_origin(headers: &HeaderMap) -> bool {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());
    match (origin, host) {
        (Some(origin), Some(host)) => origin == format!("http://{host}"),
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    use super::*;
    use crate::api;
    use crate::config::ServerConfig;

    fn headers(origin: Option<&str>, host: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(origin) = origin
            && let Ok(value) = HeaderValue::from_str(origin)
        {
            map.insert(header::ORIGIN, value);
        }
        if let Some(host) = host
            && let Ok(value) = HeaderValue::from_str(host)
        {
            map.insert(header::HOST, value);
        }
        map
    }

    #[test]
    fn matching_origin_is_allowed() {
        assert!(same_origin(&headers(
            Some("http://localhost:8080"),
            Some("localhost:8080"),
        )));
    }

    #[test]
    fn foreign_origin_is_rejected() {
        assert!(!same_origin(&headers(
            Some("http://attacker.example"),
            Some("localhost:8080"),
        )));
    }

    #[test]
    fn https_origin_on_plain_host_is_rejected() {
        assert!(!same_origin(&headers(
            Some("https://localhost:8080"),
            Some("localhost:8080"),
        )));
    }

    #[test]
    fn absent_origin_never_matches() {
        assert!(!same_origin(&headers(None, Some("localhost:8080"))));
        assert!(!same_origin(&headers(Some("http://localhost:8080"), None)));
    }

    fn app() -> axum::Router {
        let config = ServerConfig::default();
        let state = AppState {
            config: Arc::new(config.clone()),
            shutdown: CancellationToken::new(),
        };
        api::build_router(&config).with_state(state)
    }

    #[tokio::test]
    async fn mismatched_origin_yields_forbidden() {
        let Ok(request) = Request::builder()
            .uri("/ws")
            .header(header::HOST, "example.com")
            .header(header::ORIGIN, "http://attacker.example")
            .body(Body::empty())
        else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn matching_origin_without_handshake_yields_bad_request() {
        let Ok(request) = Request::builder()
            .uri("/ws")
            .header(header::HOST, "example.com")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
        else {
            panic!("failed to build request");
        };
        let Ok(response) = app().oneshot(request).await else {
            panic!("router call failed");
        };
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
