//! Current-time polling endpoint.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;

use crate::app_state::AppState;
use crate::clock;
use crate::error::{ErrorResponse, ServerError};

/// `GET /time` — Current wall-clock time as a JSON-encoded string.
///
/// # Errors
///
/// Returns [`ServerError::TimestampEncode`] if the timestamp cannot be
/// encoded as JSON (encoding a string cannot practically fail).
#[utoipa::path(
    get,
    path = "/time",
    tag = "Time",
    summary = "Poll the current time",
    description = "Returns the current wall-clock time as a JSON string in the fixed layout, e.g. `\"Tue Jan 02 15:04:05 UTC 2024\"`.",
    responses(
        (status = 200, description = "Formatted timestamp", body = String),
        (status = 500, description = "Timestamp encode failure", body = ErrorResponse),
    )
)]
pub async fn get_time() -> Result<impl IntoResponse, ServerError> {
    let body = serde_json::to_string(&clock::now_string())?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}

/// Time poll routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/time", get(get_time))
}
