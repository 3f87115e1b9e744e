//! 모델 클라이언트 팩토리 포트 구현 어댑터.

use anyhow::Result;
use tracing::info;

use crate::application::config::{DEFAULT_MODEL, ModelConfig};
use crate::application::ports::{ModelClient, ModelClientFactory};
use crate::infrastructure::config::resolve_model_endpoint;
use crate::infrastructure::ollama::OllamaClient;

/// 설정의 endpoint/model로 Ollama 클라이언트를 만든다.
pub struct OllamaClientFactory;

impl ModelClientFactory for OllamaClientFactory {
    fn build(&self, config: &ModelConfig) -> Result<Box<dyn ModelClient>> {
        let endpoint = resolve_model_endpoint(config);
        let model = config
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL);

        url::Url::parse(&endpoint.endpoint).map_err(|e| {
            anyhow::anyhow!(
                "invalid model endpoint {} (from {}): {e}",
                endpoint.endpoint,
                endpoint.source
            )
        })?;

        info!(
            endpoint = %endpoint.endpoint,
            source = %endpoint.source,
            model,
            "using ollama model server"
        );
        Ok(Box::new(OllamaClient::new(endpoint.endpoint, model)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_with_configured_model() {
        let config = ModelConfig {
            endpoint: Some("http://gpu-box:11434".to_string()),
            endpoint_env: Some("DOCKERGEN_TEST_UNSET_ENDPOINT".to_string()),
            model: Some("qwen2.5-coder:7b".to_string()),
            timeout_secs: None,
        };
        let client = OllamaClientFactory.build(&config).unwrap();
        assert_eq!(client.model(), "qwen2.5-coder:7b");
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let config = ModelConfig {
            endpoint: Some("http://exa mple:11434".to_string()),
            endpoint_env: Some("DOCKERGEN_TEST_UNSET_ENDPOINT".to_string()),
            ..ModelConfig::default()
        };
        let err = OllamaClientFactory.build(&config).err().unwrap();
        assert!(err.to_string().contains("invalid model endpoint"));
    }
}
