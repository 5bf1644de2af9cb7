//! Chat request orchestration: validate, augment, resolve, dispatch.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::error::ChatError;
use super::prompt::augment_prompt;
use super::types::ChatRequest;
use crate::llm::ProviderRegistry;

/// Handles chat requests against an injected provider registry.
#[derive(Clone)]
pub struct ChatService {
    registry: Arc<ProviderRegistry>,
}

impl ChatService {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run one request through the selected provider and return its text.
    ///
    /// Validation and provider resolution fail before any network call.
    /// No retries: one vendor failure is one failed request.
    pub async fn handle(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "Rejected invalid chat request");
            return Err(ChatError::InvalidRequest { missing });
        }

        let prompt = augment_prompt(&request.prompt);

        let provider = self.registry.resolve(&request.provider).map_err(|e| {
            warn!(provider = %e.name, "Unsupported provider requested");
            ChatError::from(e)
        })?;
        let name = provider.name();

        info!(provider = name, "Processing chat request");
        let content = provider
            .generate(&prompt, &request.api_key)
            .await
            .map_err(|source| {
                error!(provider = name, error = %source, "Provider call failed");
                ChatError::Generation {
                    provider: name,
                    source,
                }
            })?;

        debug!(provider = name, chars = content.len(), "Generated response");
        Ok(content)
    }
}
