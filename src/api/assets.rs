//! Static asset serving.
//!
//! Files under the configured assets directory are served at `/assets/`
//! with standard file-server semantics: 404 when absent, the index file
//! for directory requests, content type guessed from the extension, and
//! 405 for non-GET/HEAD methods.

use std::path::Path;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::middleware::map_response;
use axum::response::Response;
use tower_http::services::ServeDir;

use crate::app_state::AppState;

/// Static file routes mounted at `/assets`.
pub fn routes(assets_dir: &Path) -> Router<AppState> {
    Router::new()
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(map_response(annotate_html_charset))
}

/// The file service guesses `text/html` without a charset parameter;
/// annotate UTF-8 explicitly so clients do not have to sniff the encoding.
async fn annotate_html_charset(mut response: Response) -> Response {
    let bare_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        == Some("text/html");
    if bare_html {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    }
    response
}
