//! Chat request handling on top of the provider registry.

mod error;
mod prompt;
mod service;
mod types;

pub use error::{ChatError, ErrorKind};
pub use prompt::{WRITING_ASSISTANT_PREAMBLE, augment_prompt};
pub use service::ChatService;
pub use types::{ChatRequest, ChatResponse};
