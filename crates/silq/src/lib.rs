//! Silq - a stateless writing-assistant backend that forwards prompts to LLM providers.

pub mod chat;
pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
