/*
 * Responsibility
 * - GET /health (liveness)
 * - Public: answers with or without an identity header
 */
use axum::{Json, extract::Request, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::principal::Principal;

pub async fn health(_req: Request, _principal: Option<Principal>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
