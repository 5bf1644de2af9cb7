//! LLM provider trait.

use async_trait::async_trait;

use super::credential::Credential;
use super::error::LLMError;

/// Trait for LLM providers with different API formats.
///
/// Implementations hold no per-request state; a single instance is shared by
/// every request in the process.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Canonical provider name, used in logs.
    fn name(&self) -> &'static str;

    /// Send `prompt` to the vendor and return the generated text.
    async fn generate(&self, prompt: &str, credential: &Credential) -> Result<String, LLMError>;
}
