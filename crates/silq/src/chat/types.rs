//! Inbound chat request and outbound chat response.

use serde::{Deserialize, Serialize};

use crate::llm::Credential;

/// A writing-assistance request from a client.
///
/// Missing fields deserialize as empty so they fail validation like blank
/// ones do.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub api_key: Credential,
}

impl ChatRequest {
    pub fn new(
        prompt: impl Into<String>,
        provider: impl Into<String>,
        api_key: impl Into<Credential>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            provider: provider.into(),
            api_key: api_key.into(),
        }
    }

    /// Names of required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.prompt.trim().is_empty() {
            missing.push("prompt");
        }
        if self.provider.trim().is_empty() {
            missing.push("provider");
        }
        if self.api_key.is_blank() {
            missing.push("apiKey");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Generated text returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    pub content: String,
}

impl ChatResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
