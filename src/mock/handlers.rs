//! Mock API handlers.
//!
//! Every route answers immediately from the shared dataset except
//! `MoveIssue`, which drains the request body first and only then
//! acknowledges. The body is bounded but otherwise not inspected.

use axum::{
    body::Body,
    http::StatusCode,
    response::Response,
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::Serialize;

use crate::http::response::{json, json_error};
use crate::mock::dataset::MockDataset;
use crate::mock::routes::MockRoute;

#[derive(Debug, Serialize)]
struct MoveAck {
    success: bool,
}

/// Answer a mock API request.
pub async fn respond(
    dataset: &MockDataset,
    route: MockRoute,
    body: Body,
    max_body_bytes: usize,
) -> Response {
    match route {
        MockRoute::Board => json(StatusCode::OK, &dataset.board),
        MockRoute::Cards => json(StatusCode::OK, &dataset.cards),
        MockRoute::LoginCheck => json(StatusCode::OK, &dataset.user),
        MockRoute::Updates => json(StatusCode::OK, &dataset.updates),
        MockRoute::MoveIssue => acknowledge_move(body, max_body_bytes).await,
        MockRoute::NotFound => json_error(StatusCode::NOT_FOUND, "Not found"),
    }
}

/// Read the whole body, log it, then report success. Moves are not persisted.
async fn acknowledge_move(body: Body, max_body_bytes: usize) -> Response {
    match Limited::new(body, max_body_bytes).collect().await {
        Ok(collected) => {
            let bytes = collected.to_bytes();
            tracing::info!(
                bytes = bytes.len(),
                body = %String::from_utf8_lossy(&bytes),
                "Move issue request"
            );
            json(StatusCode::OK, &MoveAck { success: true })
        }
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            tracing::warn!(limit = max_body_bytes, "Move issue body exceeds limit");
            json_error(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Move issue body could not be read");
            json_error(StatusCode::BAD_REQUEST, "Bad request")
        }
    }
}
