//! End-to-end tests for the HTTP surface against mocked vendor APIs.

use std::io;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

use silq::chat::{ChatService, WRITING_ASSISTANT_PREAMBLE};
use silq::config::{ProviderEndpoint, ProvidersConfig};
use silq::llm::ProviderRegistry;
use silq::server::{AppState, build_app};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn app(server: &MockServer) -> Router {
    let providers = ProvidersConfig {
        openai: ProviderEndpoint {
            base_url: format!("{}/v1", server.uri()),
            model: "gpt-3.5-turbo".to_string(),
        },
        gemini: ProviderEndpoint {
            base_url: format!("{}/v1beta", server.uri()),
            model: "gemini-1.5-flash".to_string(),
        },
    };
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let registry = ProviderRegistry::with_defaults(client, &providers);
    let state = AppState {
        chat: ChatService::new(Arc::new(registry)),
    };
    build_app(state, 30)
}

async fn post_chat(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn openai_request_is_augmented_and_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Fixed this sentence." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Fix this sentence", "provider": "OPENAI", "apiKey": "sk-x" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": "Fixed this sentence." }));

    let requests = server.received_requests().await.unwrap();
    let sent: Value = requests[0].body_json().unwrap();
    let content = sent["messages"][0]["content"].as_str().unwrap();
    assert!(content.starts_with(WRITING_ASSISTANT_PREAMBLE));
    assert!(content.ends_with("Fix this sentence"));
    assert_eq!(sent["messages"][0]["role"], "user");
}

#[tokio::test]
async fn google_alias_routes_to_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Hi!" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "google", "apiKey": "k1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Hi!");

    let requests = server.received_requests().await.unwrap();
    let sent: Value = requests[0].body_json().unwrap();
    let expected = format!("{WRITING_ASSISTANT_PREAMBLE}Hello");
    assert_eq!(sent, json!({ "contents": [{ "parts": [{ "text": expected }] }] }));
}

#[tokio::test]
async fn unknown_provider_is_rejected_without_outbound_call() {
    let server = MockServer::start().await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "unknown-vendor", "apiKey": "k1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unsupported_provider");
    assert_eq!(
        body["error"]["supported"],
        json!(["gemini", "google", "gpt", "openai"])
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_field_is_rejected_without_outbound_call() {
    let server = MockServer::start().await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "openai" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
    assert!(body["error"]["message"].as_str().unwrap().contains("apiKey"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app(&server), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn vendor_failure_is_bad_gateway_without_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("key k-secret rejected"))
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "gemini", "apiKey": "k-secret" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "provider_call_failed");
    assert!(!body.to_string().contains("k-secret"));
}

#[tokio::test]
async fn vendor_response_without_content_is_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "gpt", "apiKey": "sk-x" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "response_parse_failed");
}

#[tokio::test]
async fn providers_are_listed() {
    let server = MockServer::start().await;
    let (status, body) = get(app(&server), "/api/llm/providers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "providers": ["gemini", "google", "gpt", "openai"], "count": 4 })
    );
}

#[tokio::test]
async fn provider_support_is_case_insensitive() {
    let server = MockServer::start().await;

    let (_, body) = get(app(&server), "/api/llm/providers/GPT/supported").await;
    assert_eq!(body, json!({ "provider": "GPT", "supported": true }));

    let (_, body) = get(app(&server), "/api/llm/providers/claude/supported").await;
    assert_eq!(body, json!({ "provider": "claude", "supported": false }));
}

#[tokio::test]
async fn health_reports_up() {
    let server = MockServer::start().await;
    let (status, body) = get(app(&server), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], "Silq AI Backend");
    assert!(body["timestamp"].is_string());
}

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Replies with the request URL and a raw key echo in the error body.
struct EchoRequest(&'static str);

impl Respond for EchoRequest {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        ResponseTemplate::new(500).set_body_string(format!(
            "rejected {} for {}",
            self.0, request.url
        ))
    }
}

#[tokio::test]
async fn vendor_failures_never_log_credentials() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("silq=trace,tower_http=trace"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(EchoRequest("ab+cd/ef"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(EchoRequest("sk-live-123"))
        .mount(&server)
        .await;

    let (status, body) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "gemini", "apiKey": "ab+cd/ef" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.to_string().contains("ab%2Bcd%2Fef"));

    let (status, _) = post_chat(
        app(&server),
        json!({ "prompt": "Hello", "provider": "openai", "apiKey": "sk-live-123" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let output = logs.contents();
    assert!(output.contains("Provider call failed"), "{output}");
    assert!(output.contains("[REDACTED]"), "{output}");
    for secret in ["ab+cd/ef", "ab%2Bcd%2Fef", "sk-live-123"] {
        assert!(!output.contains(secret), "{secret} leaked into logs:\n{output}");
    }
}
