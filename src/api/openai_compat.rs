use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::api::models::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_PATH: &str = "/chat/completions";

/// Failure of a single round trip to a completion endpoint.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider error {status}: {body}")]
    Provider { status: StatusCode, body: String },

    #[error("Invalid API key header: {0}")]
    InvalidKey(#[from] InvalidHeaderValue),

    #[error("Response has no content")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// Anything that turns an ordered message list into one reply text.
#[async_trait]
pub trait CompletionEndpoint: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, EndpointError>;
}

/// OpenAI-compatible `POST {base_url}/chat/completions` with Bearer auth.
#[derive(Clone)]
pub struct OpenAiCompatEndpoint {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiCompatEndpoint {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            client,
            endpoint: build_endpoint(base_url),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        }
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    pub fn model(&self) -> &str { &self.model }
}

#[async_trait]
impl CompletionEndpoint for OpenAiCompatEndpoint {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, EndpointError> {
        chat_complete(
            &self.client,
            &self.endpoint,
            &self.api_key,
            messages,
            &self.model,
            self.temperature,
        )
        .await
    }
}

pub fn build_endpoint(base_url: &str) -> String { format!("{}{}", base_url.trim_end_matches('/'), DEFAULT_PATH) }

fn build_headers(api_key: &str) -> Result<HeaderMap, EndpointError> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub async fn chat_complete(
    client: &reqwest::Client,
    endpoint: &str,
    api_key: &str,
    messages: Vec<ChatMessage>,
    model: &str,
    temperature: Option<f32>,
) -> Result<String, EndpointError> {
    let req = ChatRequest {
        model: model.to_string(),
        messages,
        temperature,
    };

    let headers = build_headers(api_key)?;

    debug!(endpoint, model, messages = req.messages.len(), "sending chat completion");
    let resp = client
        .post(endpoint)
        .headers(headers)
        .json(&req)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(EndpointError::Provider { status, body });
    }

    let body: ChatResponse = resp.json().await?;
    body.into_content().ok_or(EndpointError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_endpoint_trims_trailing_slash() {
        assert_eq!(
            build_endpoint("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(build_endpoint("http://localhost:8080"), "http://localhost:8080/chat/completions");
    }

    #[test]
    fn test_headers_carry_bearer_token() {
        let headers = build_headers("gsk_test").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap().to_str().unwrap(), "Bearer gsk_test");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_headers_reject_control_characters() {
        assert!(matches!(build_headers("bad\nkey"), Err(EndpointError::InvalidKey(_))));
    }

    #[test]
    fn test_provider_error_mentions_status() {
        let err = EndpointError::Provider { status: StatusCode::UNAUTHORIZED, body: "invalid api key".into() };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("invalid api key"));
    }
}
