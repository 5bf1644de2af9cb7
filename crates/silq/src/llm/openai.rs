//! OpenAI chat-completions provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::credential::Credential;
use super::error::{LLMError, api_error};
use super::provider::LLMProvider;

/// OpenAI provider using the chat-completions API.
pub struct OpenAIProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    pub const NAME: &'static str = "openai";
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";

    #[must_use]
    pub fn new(client: Client, base_url: String, model: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn generate(&self, prompt: &str, credential: &Credential) -> Result<String, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = Request {
            model: &self.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, "Sending request to OpenAI API");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = LLMError::from(e);
                error!(error = %err, "Error calling OpenAI API");
                err
            })?;

        if !response.status().is_success() {
            let err = api_error(response, credential).await;
            error!(error = %err, "OpenAI API returned an error");
            return Err(err);
        }

        let body = response.text().await?;
        extract_content(&body)
    }
}

/// Pull `choices[0].message.content` out of a chat-completions response body.
fn extract_content(body: &str) -> Result<String, LLMError> {
    let response: Response =
        serde_json::from_str(body).map_err(|e| LLMError::Decode(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|content| !content.is_empty())
        .ok_or(LLMError::MissingContent {
            provider: OpenAIProvider::NAME,
        })
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
