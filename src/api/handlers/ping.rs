/*
 * Responsibility
 * - GET /ping (liveness check used by the sandbox runner)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::message::MessageResponse;

pub const PONG: &str = "pong";

pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageResponse::ok(PONG)))
}
