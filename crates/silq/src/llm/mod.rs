//! LLM provider clients and the registry that dispatches to them.

mod credential;
mod error;
mod gemini;
mod openai;
mod provider;
mod registry;

pub use credential::Credential;
pub use error::{LLMError, UnsupportedProvider};
pub use gemini::GeminiProvider;
pub use openai::OpenAIProvider;
pub use provider::LLMProvider;
pub use registry::ProviderRegistry;
