//! Ollama HTTP 클라이언트.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};

use super::wire::{ChatMessage, ChatRequest, ChatResponse, ErrorBody};
use crate::application::error::ModelError;
use crate::application::ports::ModelClient;

pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    /// 전역 타임아웃 없이 클라이언트를 생성한다. 시간 제한은 호출마다 지정한다.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: build_api_client(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn chat(&self, prompt: &str, timeout: Option<Duration>) -> Result<String, ModelError> {
        let url = format!("{}/api/chat", self.endpoint);
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending chat request to ollama");

        let mut request = self.client.post(&url).json(&payload);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            error!(endpoint = %self.endpoint, "ollama request failed: {e}");
            self.transport_error(e, timeout)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e, timeout)
            } else {
                ModelError::InvalidResponse {
                    message: format!("failed to read response body: {e}"),
                }
            }
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            error!(status = status.as_u16(), "ollama returned an error: {message}");
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ModelError::InvalidResponse {
                message: format!("unexpected chat response: {e}"),
            })?;

        if !parsed.done {
            warn!("ollama response indicates incomplete generation");
        }
        debug!(
            prompt_tokens = parsed.prompt_eval_count.unwrap_or(0),
            completion_tokens = parsed.eval_count.unwrap_or(0),
            "ollama chat completed"
        );

        Ok(parsed.message.content.trim().to_string())
    }

    /// 시간 제한을 지정한 호출의 타임아웃만 `Timeout`으로 분류한다.
    /// 제한 없이 발생한 타임아웃(커넥션 단계 등)은 서버 접근 실패로 본다.
    fn transport_error(&self, err: reqwest::Error, timeout: Option<Duration>) -> ModelError {
        match timeout {
            Some(limit) if err.is_timeout() => ModelError::Timeout {
                millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            },
            _ => ModelError::Unavailable {
                endpoint: self.endpoint.clone(),
                message: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        prompt: &str,
        timeout: Option<Duration>,
    ) -> Result<String, ModelError> {
        self.chat(prompt, timeout).await
    }
}

/// 모델 호출용 기본 HTTP 클라이언트를 생성한다.
fn build_api_client() -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder().build().unwrap_or_else(|_| Client::new())
}
