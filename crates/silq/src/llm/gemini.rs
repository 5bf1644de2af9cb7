//! Google Gemini provider using the generateContent API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use url::Url;

use super::credential::Credential;
use super::error::{LLMError, api_error};
use super::provider::LLMProvider;

/// Gemini provider. The API key travels as the `key` query parameter.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub const NAME: &'static str = "gemini";
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    #[must_use]
    pub fn new(client: Client, base_url: String, model: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn endpoint(&self, credential: &Credential) -> Result<Url, LLMError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        // Parse errors echo the input, which holds no secret yet.
        Url::parse_with_params(&url, &[("key", credential.expose())])
            .map_err(|e| LLMError::Endpoint(format!("{url}: {e}")))
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn generate(&self, prompt: &str, credential: &Credential) -> Result<String, LLMError> {
        let url = self.endpoint(credential)?;
        let request = Request {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.model, "Sending request to Gemini API");
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = LLMError::from(e);
                error!(error = %err, "Error calling Gemini API");
                err
            })?;

        if !response.status().is_success() {
            let err = api_error(response, credential).await;
            error!(error = %err, "Gemini API returned an error");
            return Err(err);
        }

        let body = response.text().await?;
        extract_content(&body)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a generateContent body.
fn extract_content(body: &str) -> Result<String, LLMError> {
    let response: Response =
        serde_json::from_str(body).map_err(|e| LLMError::Decode(e.to_string()))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|text| !text.is_empty())
        .ok_or(LLMError::MissingContent {
            provider: GeminiProvider::NAME,
        })
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
struct Request<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
