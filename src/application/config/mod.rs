//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL_ENDPOINT_ENV: &str = "OLLAMA_HOST";
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP 서버 바인딩 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로컬 모델 서버 호출 설정
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ModelConfig {
    /// 모델 서버 base URL
    pub endpoint: Option<String>,
    /// endpoint를 덮어쓸 환경변수 이름(기본 OLLAMA_HOST)
    pub endpoint_env: Option<String>,
    /// 모델 식별자
    pub model: Option<String>,
    /// 모델 호출 타임아웃(초). 미지정 시 타임아웃 없음
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn host(&self) -> String {
        self.server
            .host
            .clone()
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    /// `host:port` 형태의 바인딩 주소.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    pub fn model_name(&self) -> String {
        self.model
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn model_timeout(&self) -> Option<Duration> {
        self.model
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// 후순위(나중 파일/CLI 플래그) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.server.merge_from(other.server);
        self.model.merge_from(other.model);
    }
}

impl ServerConfig {
    pub fn merge_from(&mut self, other: ServerConfig) {
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.port.is_some() {
            self.port = other.port;
        }
    }
}

impl ModelConfig {
    pub fn endpoint_env(&self) -> &str {
        self.endpoint_env
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_MODEL_ENDPOINT_ENV)
    }

    pub fn merge_from(&mut self, other: ModelConfig) {
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
        if other.endpoint_env.is_some() {
            self.endpoint_env = other.endpoint_env;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.model_name(), DEFAULT_MODEL);
        assert_eq!(config.model_timeout(), None);
        assert_eq!(config.model.endpoint_env(), "OLLAMA_HOST");
    }

    #[test]
    fn later_values_override_earlier_ones() {
        let mut config: Config = serde_json::from_str(
            r#"{"server":{"port":9000},"model":{"model":"qwen2.5:7b","timeout_secs":30}}"#,
        )
        .unwrap();
        config.merge_from(
            serde_json::from_str(r#"{"server":{"host":"127.0.0.1"},"model":{"timeout_secs":0}}"#)
                .unwrap(),
        );

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.model_name(), "qwen2.5:7b");
        assert_eq!(config.model_timeout(), None);
    }

    #[test]
    fn blank_endpoint_env_falls_back_to_default() {
        let config = ModelConfig {
            endpoint_env: Some("  ".to_string()),
            ..ModelConfig::default()
        };
        assert_eq!(config.endpoint_env(), DEFAULT_MODEL_ENDPOINT_ENV);
    }
}
