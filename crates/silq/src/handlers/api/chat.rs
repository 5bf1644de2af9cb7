//! Chat HTTP handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::chat::{ChatRequest, ChatResponse};
use crate::response;
use crate::server::AppState;

/// POST /api/chat
///
/// Request body: `{"prompt": "...", "provider": "openai", "apiKey": "..."}`
/// Response body: `{"content": "..."}`
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected malformed chat request body");
            return response::bad_request(rejection.body_text());
        }
    };

    info!(provider = %request.provider.trim(), "Received chat request");

    match state.chat.handle(&request).await {
        Ok(content) => {
            info!(provider = %request.provider.trim(), "Processed chat request");
            Json(ChatResponse::new(content)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
