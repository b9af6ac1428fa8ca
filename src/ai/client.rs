//! Completion service client module
//!
//! Sends the chat prompt to an OpenAI-compatible `chat/completions` endpoint
//! and classifies failures into the error taxonomy.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Produces completion text for a chat prompt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the upstream call fails or its response has no
    /// completion text.
    async fn complete(
        &self,
        api_key: &str,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizeError>;
}

/// reqwest-backed client for the configured completion endpoint
pub struct HttpCompletionClient {
    http: Client,
    endpoint: String,
    model_name: String,
}

impl HttpCompletionClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: String, model_name: String) -> Result<Self, SummarizeError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SummarizeError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_http(http, endpoint, model_name))
    }

    /// Uses an already configured reqwest client.
    #[must_use]
    pub fn with_http(http: Client, endpoint: String, model_name: String) -> Self {
        Self {
            http,
            endpoint,
            model_name,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizeError> {
        Self::new(config.ai_gateway_url.clone(), config.ai_model.clone())
    }

    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        json!({
            "model": self.model_name,
            "messages": messages_to_json(prompt),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        api_key: &str,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizeError> {
        info!(
            model = %self.model_name,
            "Calling AI service with {} messages in prompt",
            prompt.len()
        );

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {api_key}")
            .parse()
            .map_err(|e| SummarizeError::Http(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummarizeError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let response = self
            .http
            .post(&self.endpoint)
            .headers(headers)
            .json(&self.build_request_body(&prompt))
            .send()
            .await
            .map_err(|e| SummarizeError::Http(format!("AI service request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            error!(status = status.as_u16(), body = %error_text, "AI service error");
            return Err(classify_status(status.as_u16(), error_text));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::InvalidResponse(format!("Failed to parse AI service response: {e}"))
        })?;
        info!("AI service response received");

        extract_completion_text(&response_json)
    }
}

/// Maps a non-success upstream status onto the error taxonomy.
///
/// 429 and 402 are checked first; everything else is a generic upstream failure.
#[must_use]
pub fn classify_status(status: u16, body: String) -> SummarizeError {
    match status {
        429 => SummarizeError::RateLimited,
        402 => SummarizeError::QuotaExceeded,
        _ => SummarizeError::Upstream { status, body },
    }
}

/// Reads `choices[0].message.content` from a chat completion response.
///
/// # Errors
///
/// Returns `InvalidResponse` when the path is missing or not a string.
pub fn extract_completion_text(response_json: &Value) -> Result<String, SummarizeError> {
    response_json
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(std::string::ToString::to_string)
        .ok_or_else(|| SummarizeError::InvalidResponse("No completion in response".to_string()))
}

fn messages_to_json(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                // Prompts here are text-only.
                Content::ImageUrl(_) => json!(""),
            };

            json!({
                "role": role_str,
                "content": content_val
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::prompt_builder::build_prompt;

    #[test]
    fn test_classify_status_rate_limited() {
        let err = classify_status(429, "slow down".to_string());
        assert!(matches!(err, SummarizeError::RateLimited));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_classify_status_quota_exceeded() {
        let err = classify_status(402, "pay up".to_string());
        assert!(matches!(err, SummarizeError::QuotaExceeded));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_classify_status_other_is_generic_upstream() {
        let err = classify_status(503, "backend exploded".to_string());
        match &err {
            SummarizeError::Upstream { status, body } => {
                assert_eq!(*status, 503);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
        assert_eq!(err.user_message(), "Failed to process request");
    }

    #[test]
    fn test_extract_completion_text() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "SUMMARY:\nHi" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });
        assert_eq!(extract_completion_text(&body).unwrap(), "SUMMARY:\nHi");
    }

    #[test]
    fn test_extract_completion_text_missing_choices() {
        let err = extract_completion_text(&json!({ "choices": [] })).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidResponse(_)));
    }

    /// Answers one request with `status`/`body` and hands back what it received.
    fn serve_once(
        status: u16,
        body: &'static str,
    ) -> (String, std::thread::JoinHandle<(String, String)>) {
        use std::io::Read;

        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let handle = std::thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).unwrap();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string())
                .unwrap_or_default();
            request
                .respond(
                    tiny_http::Response::from_string(body)
                        .with_status_code(tiny_http::StatusCode(status)),
                )
                .unwrap();
            (auth, received)
        });

        (format!("http://{addr}/v1/chat/completions"), handle)
    }

    fn local_client(endpoint: String) -> HttpCompletionClient {
        let http = Client::builder().no_proxy().build().unwrap();
        HttpCompletionClient::with_http(http, endpoint, "test-model".to_string())
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let (endpoint, server) = serve_once(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"SUMMARY:\nDone."}}]}"#,
        );

        let text = local_client(endpoint)
            .complete("live-key", build_prompt("document"))
            .await
            .unwrap();
        assert_eq!(text, "SUMMARY:\nDone.");

        let (auth, received) = server.join().unwrap();
        assert_eq!(auth, "Bearer live-key");
        let sent: Value = serde_json::from_str(&received).unwrap();
        assert_eq!(sent["model"], "test-model");
        assert_eq!(sent["messages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_complete_maps_429_to_rate_limited() {
        let (endpoint, server) = serve_once(429, "too many requests");

        let err = local_client(endpoint)
            .complete("live-key", build_prompt("document"))
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::RateLimited));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_complete_maps_402_to_quota_exceeded() {
        let (endpoint, server) = serve_once(402, "payment required");

        let err = local_client(endpoint)
            .complete("live-key", build_prompt("document"))
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::QuotaExceeded));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_complete_keeps_upstream_body_for_other_statuses() {
        let (endpoint, server) = serve_once(500, "model crashed");

        let err = local_client(endpoint)
            .complete("live-key", build_prompt("document"))
            .await
            .unwrap_err();
        match &err {
            SummarizeError::Upstream { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, "model crashed");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
        assert_eq!(err.user_message(), "Failed to process request");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_complete_rejects_response_without_choices() {
        let (endpoint, server) = serve_once(200, r#"{"choices":[]}"#);

        let err = local_client(endpoint)
            .complete("live-key", build_prompt("document"))
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidResponse(_)));
        server.join().unwrap();
    }

    #[test]
    fn test_request_body_shape() {
        let client = HttpCompletionClient::new(
            "https://example.com/v1/chat/completions".to_string(),
            "test-model".to_string(),
        )
        .unwrap();
        let body = client.build_request_body(&build_prompt("document"));

        assert_eq!(body["model"], "test-model");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"].as_str().unwrap().ends_with("document"));
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
