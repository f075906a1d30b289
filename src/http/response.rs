//! Response construction helpers.
//!
//! Mock responses are always `application/json`; proxy failures are plain
//! text so they read well in a browser tab.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Serialize `body` as a JSON response with the given status.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, Json(body)).into_response()
}

/// `{"error": message}` with the given status.
pub fn json_error(status: StatusCode, message: &str) -> Response {
    json(status, &ErrorBody { error: message })
}

/// Plain-text response with the given status.
pub fn text(status: StatusCode, message: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}
