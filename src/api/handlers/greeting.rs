//! Greeting handler: the static `Hello World!` endpoint.

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// `GET /hello` — Static greeting.
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Site",
    summary = "Static greeting",
    description = "Returns the fixed greeting string, with no trailing newline.",
    responses(
        (status = 200, description = "Greeting text", body = String, content_type = "text/plain"),
    )
)]
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// Greeting routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}
