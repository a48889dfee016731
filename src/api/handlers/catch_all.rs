/*
 * Responsibility
 * - GET on any path other than /ping
 * - the path is only traced, the body never depends on it
 */
use axum::{Json, http::StatusCode, http::Uri, response::IntoResponse};

use crate::api::dto::message::MessageResponse;

pub const DEFAULT_MESSAGE: &str = "Winter is Coming 🐺";

pub async fn catch_all(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "unmatched path, serving default message");
    (StatusCode::OK, Json(MessageResponse::ok(DEFAULT_MESSAGE)))
}
