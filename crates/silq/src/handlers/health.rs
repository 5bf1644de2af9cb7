use axum::Json;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn readyz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: DateTime<Utc>,
    message: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: "Silq AI Backend",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        message: "Backend is running successfully",
    })
}

/// GET /api/chat/health
pub async fn chat_health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Chat service is running")
}
