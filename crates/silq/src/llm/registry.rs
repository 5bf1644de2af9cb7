//! Provider registry for resolving provider names to client instances.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, info};

use super::error::UnsupportedProvider;
use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::provider::LLMProvider;
use crate::config::ProvidersConfig;

/// Registry of LLM providers, keyed by normalized (trimmed, lowercase) name.
///
/// Aliases are just additional keys pointing at the same instance. Built once
/// at startup; read-only afterwards.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn LLMProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in providers and their aliases.
    ///
    /// All providers share `client`, so they share one connection pool.
    pub fn with_defaults(client: Client, config: &ProvidersConfig) -> Self {
        let mut registry = Self::new();

        let openai = OpenAIProvider::new(
            client.clone(),
            config.openai.base_url.clone(),
            config.openai.model.clone(),
        );
        registry.register(&["openai", "gpt"], Arc::new(openai));

        let gemini = GeminiProvider::new(
            client,
            config.gemini.base_url.clone(),
            config.gemini.model.clone(),
        );
        registry.register(&["gemini", "google"], Arc::new(gemini));

        info!(
            count = registry.providers.len(),
            providers = ?registry.list_supported(),
            "Provider registry initialized"
        );
        registry
    }

    /// Register a provider implementation under one or more names.
    pub fn register(&mut self, names: &[&str], implementation: Arc<dyn LLMProvider>) {
        for name in names {
            self.providers
                .insert(normalize(name), Arc::clone(&implementation));
        }
    }

    /// Resolve a provider by name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn LLMProvider>, UnsupportedProvider> {
        let key = normalize(name);
        let provider = (!key.is_empty())
            .then(|| self.providers.get(&key))
            .flatten()
            .ok_or_else(|| UnsupportedProvider {
                name: name.trim().to_string(),
                supported: self.list_supported().into_iter().collect(),
            })?;

        debug!(provider = %key, "Resolved LLM provider");
        Ok(Arc::clone(provider))
    }

    /// All registered names, aliases included, in sorted order.
    pub fn list_supported(&self) -> BTreeSet<String> {
        self.providers.keys().cloned().collect()
    }

    pub fn is_supported(&self, name: &str) -> bool {
        let key = normalize(name);
        !key.is_empty() && self.providers.contains_key(&key)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
