//! Chat request error types.

use thiserror::Error;

use crate::llm::{LLMError, UnsupportedProvider};

/// Stable classification of a failed chat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    UnsupportedProvider,
    ProviderCall,
    ResponseParse,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::UnsupportedProvider => "unsupported_provider",
            ErrorKind::ProviderCall => "provider_call_failed",
            ErrorKind::ResponseParse => "response_parse_failed",
        }
    }
}

/// Errors returned by [`ChatService::handle`](super::ChatService::handle).
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid chat request: missing {}", missing.join(", "))]
    InvalidRequest { missing: Vec<&'static str> },

    #[error(transparent)]
    UnsupportedProvider(#[from] UnsupportedProvider),

    #[error("failed to generate response from {provider}: {source}")]
    Generation {
        provider: &'static str,
        #[source]
        source: LLMError,
    },
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            ChatError::UnsupportedProvider(_) => ErrorKind::UnsupportedProvider,
            ChatError::Generation { source, .. } if source.is_call_failure() => {
                ErrorKind::ProviderCall
            }
            ChatError::Generation { .. } => ErrorKind::ResponseParse,
        }
    }
}
