//! API handlers.

mod chat;
mod providers;

pub use chat::chat;
pub use providers::{list_providers, provider_supported};
