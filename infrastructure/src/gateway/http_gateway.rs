//! HTTP LLM Gateway implementation.
//!
//! Adapter for any OpenAI-compatible chat completions endpoint. Each
//! session keeps its own message history so a worker's repeated invocations
//! share one conversation, matching the session contract of the
//! application-layer port.

use async_trait::async_trait;
use conductor_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use conductor_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Liveness report from [`HttpLlmGateway::probe`].
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub detail: String,
}

/// LLM Gateway speaking the OpenAI-compatible chat completions protocol.
pub struct HttpLlmGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpLlmGateway {
    /// Create a gateway for the given base URL (e.g.
    /// `https://api.example.com/v1`), with an optional bearer token.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "HttpLlmGateway initialized");

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Probe provider liveness with a GET against the models endpoint.
    ///
    /// Peripheral to the coordination core: asserts that the configured
    /// endpoint answers at all, nothing more.
    pub async fn probe(&self) -> Result<HealthStatus, GatewayError> {
        let url = self.endpoint("models");
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                Ok(HealthStatus {
                    healthy: status.is_success(),
                    detail: format!("GET {} -> {}", url, status),
                })
            }
            Err(e) if e.is_timeout() => Err(GatewayError::Timeout),
            Err(e) => Ok(HealthStatus {
                healthy: false,
                detail: format!("GET {} failed: {}", url, e),
            }),
        }
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(HttpSession {
            client: self.client.clone(),
            url: self.endpoint("chat/completions"),
            api_key: self.api_key.clone(),
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
            history: Mutex::new(Vec::new()),
        }))
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// One chat completions conversation.
struct HttpSession {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: Model,
    system_prompt: String,
    history: Mutex<Vec<ChatMessage>>,
}

#[async_trait]
impl LlmSession for HttpSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        // Hold the history lock across the call: one candidate in flight
        // per session, and the reply must land next to its prompt.
        let mut history = self.history.lock().await;

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage {
            role: "system",
            content: self.system_prompt.clone(),
        });
        messages.extend(history.iter().cloned());
        messages.push(ChatMessage {
            role: "user",
            content: content.to_string(),
        });

        let body = ChatRequest {
            model: self.model.as_str(),
            messages,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(model = %self.model, history_len = history.len(), "sending chat request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else if e.is_connect() {
                GatewayError::ConnectionError(e.to_string())
            } else {
                GatewayError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                conductor_domain::util::truncate_str(&detail, 200)
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("malformed response: {}", e)))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GatewayError::RequestFailed("response had no content".to_string()))?;

        history.push(ChatMessage {
            role: "user",
            content: content.to_string(),
        });
        history.push(ChatMessage {
            role: "assistant",
            content: text.clone(),
        });

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base: &str) -> HttpLlmGateway {
        HttpLlmGateway::new(base, None, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_join_strips_slashes() {
        let g = gateway("http://localhost:8080/v1/");
        assert_eq!(
            g.endpoint("chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(g.endpoint("/models"), "http://localhost:8080/v1/models");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "claude-sonnet-4.5",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You research.".to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: "look this up".to_string(),
                },
            ],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4.5");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "look this up");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "hello"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("hello")
        );

        // Empty content is representable and must be caught by the caller
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
