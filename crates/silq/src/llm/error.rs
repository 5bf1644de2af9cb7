//! LLM error types.

use thiserror::Error;

use super::credential::Credential;

/// Build an `Api` error from a non-success response, scrubbing the credential
/// from whatever the vendor echoed back.
pub async fn api_error(response: reqwest::Response, credential: &Credential) -> LLMError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    LLMError::Api {
        status,
        message: credential.redact(body.trim()),
    }
}

/// Errors that can occur when calling a provider.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed before a response arrived.
    ///
    /// The URL is stripped on conversion since some providers carry the
    /// credential as a query parameter.
    #[error("http request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Configured base URL could not be turned into a request URL.
    #[error("invalid endpoint url: {0}")]
    Endpoint(String),

    /// Response body was not the JSON shape the provider documents.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Response decoded but the generated text was missing or empty.
    #[error("no content found in {provider} response")]
    MissingContent { provider: &'static str },
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::Request(err.without_url())
    }
}

impl LLMError {
    /// True for failures that happened while talking to the vendor, false for
    /// failures to make sense of what it sent back.
    pub fn is_call_failure(&self) -> bool {
        matches!(
            self,
            LLMError::Request(_) | LLMError::Api { .. } | LLMError::Endpoint(_)
        )
    }
}

/// A provider identifier that no registered client answers to.
#[derive(Debug, Clone, Error)]
#[error("unsupported provider '{name}'. Available providers: {}", supported.join(", "))]
pub struct UnsupportedProvider {
    pub name: String,
    pub supported: Vec<String>,
}
