//! HTTP request handlers.

pub mod api;
mod health;
mod version;

pub use health::{chat_health, health, livez, readyz};
pub use version::version;
