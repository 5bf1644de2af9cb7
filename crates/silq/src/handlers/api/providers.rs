//! Provider discovery HTTP handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::server::AppState;

#[derive(Serialize)]
pub struct ListProvidersResponse {
    providers: Vec<String>,
    count: usize,
}

#[derive(Serialize)]
pub struct ProviderSupportResponse {
    provider: String,
    supported: bool,
}

/// GET /api/llm/providers
pub async fn list_providers(State(state): State<AppState>) -> Json<ListProvidersResponse> {
    let providers: Vec<String> = state.chat.registry().list_supported().into_iter().collect();
    Json(ListProvidersResponse {
        count: providers.len(),
        providers,
    })
}

/// GET /api/llm/providers/{provider}/supported
pub async fn provider_supported(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Json<ProviderSupportResponse> {
    let supported = state.chat.registry().is_supported(&provider);
    Json(ProviderSupportResponse {
        provider,
        supported,
    })
}
