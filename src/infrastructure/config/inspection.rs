//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_model_endpoint;
use crate::application::config::{Config, ModelConfig, ServerConfig};
use crate::domain::knowledge;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub effective: EffectiveSettings,
    pub supported_languages: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub bind_address: String,
    pub model_endpoint: String,
    pub model_endpoint_source: String,
    pub model: String,
    pub model_timeout_secs: Option<u64>,
}

impl ConfigInspection {
    /// 파일 병합 결과에 CLI 플래그 값을 덮어쓴 뒤 진단 정보를 만든다.
    pub(crate) fn from_loaded(loaded: LoadedConfig, overrides: &Config) -> Self {
        let mut config = loaded.config;
        config.merge_from(overrides.clone());
        let endpoint = resolve_model_endpoint(&config.model);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveSettings {
                bind_address: config.bind_address(),
                model_endpoint: endpoint.endpoint,
                model_endpoint_source: endpoint.source,
                model: config.model_name(),
                model_timeout_secs: config.model_timeout().map(|t| t.as_secs()),
            },
            server: config.server,
            model: config.model,
            supported_languages: knowledge::supported_languages().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn overrides_are_reflected_in_effective_settings() {
        let loaded = LoadedConfig {
            config: serde_json::from_str(
                r#"{"server":{"port":9000},"model":{"endpoint":"http://gpu:11434","endpoint_env":"DOCKERGEN_TEST_UNSET_ENDPOINT"}}"#,
            )
            .unwrap(),
            searched_paths: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            loaded_paths: vec![PathBuf::from("a.json")],
        };
        let mut overrides = Config::default();
        overrides.server.port = Some(8080);
        overrides.model.model = Some("phi3:mini".to_string());

        let inspection = ConfigInspection::from_loaded(loaded, &overrides);

        assert_eq!(inspection.effective.bind_address, "0.0.0.0:8080");
        assert_eq!(inspection.effective.model, "phi3:mini");
        assert_eq!(inspection.effective.model_endpoint, "http://gpu:11434");
        assert_eq!(inspection.effective.model_endpoint_source, "config");
        assert_eq!(inspection.loaded_paths, vec!["a.json".to_string()]);
        assert!(inspection.supported_languages.contains(&"Rust"));
    }
}
