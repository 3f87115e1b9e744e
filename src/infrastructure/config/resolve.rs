//! 설정 값(env 등)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::{DEFAULT_MODEL_ENDPOINT, ModelConfig};

/// 모델 endpoint 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolution {
    pub endpoint: String,
    pub source: String,
}

/// 모델 endpoint를 해석한다.
/// 우선순위: `endpoint_env` 환경변수 > 설정 `endpoint` > 기본값.
pub fn resolve_model_endpoint(cfg: &ModelConfig) -> EndpointResolution {
    let env_name = cfg.endpoint_env();
    if let Some(v) = env::var(env_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        return EndpointResolution {
            endpoint: normalize_endpoint(&v),
            source: format!("env:{env_name}"),
        };
    }

    if let Some(endpoint) = cfg
        .endpoint
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return EndpointResolution {
            endpoint: normalize_endpoint(endpoint),
            source: "config".to_string(),
        };
    }

    EndpointResolution {
        endpoint: DEFAULT_MODEL_ENDPOINT.to_string(),
        source: "default".to_string(),
    }
}

/// `OLLAMA_HOST=0.0.0.0:11434`처럼 scheme이 없는 값도 받아들인다.
fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_endpoint_is_used_when_env_is_unset() {
        let cfg = ModelConfig {
            endpoint: Some("http://gpu-box:11434/".to_string()),
            endpoint_env: Some("DOCKERGEN_TEST_UNSET_ENDPOINT".to_string()),
            ..ModelConfig::default()
        };
        let resolved = resolve_model_endpoint(&cfg);
        assert_eq!(resolved.endpoint, "http://gpu-box:11434");
        assert_eq!(resolved.source, "config");
    }

    #[test]
    fn falls_back_to_default_endpoint() {
        let cfg = ModelConfig {
            endpoint_env: Some("DOCKERGEN_TEST_UNSET_ENDPOINT".to_string()),
            ..ModelConfig::default()
        };
        let resolved = resolve_model_endpoint(&cfg);
        assert_eq!(resolved.endpoint, DEFAULT_MODEL_ENDPOINT);
        assert_eq!(resolved.source, "default");
    }

    #[test]
    fn endpoint_without_scheme_gets_http() {
        assert_eq!(normalize_endpoint("0.0.0.0:11434"), "http://0.0.0.0:11434");
        assert_eq!(
            normalize_endpoint("https://ollama.internal/"),
            "https://ollama.internal"
        );
    }
}
