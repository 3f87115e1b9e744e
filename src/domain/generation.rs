//! Dockerfile 생성 요청/결과 값 객체.

use serde::{Deserialize, Serialize};

/// 저장소 분석으로 얻은 메타데이터. 모든 필드는 선택값이다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryMetadata {
    #[serde(default)]
    pub detected_language: Option<String>,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
    #[serde(default)]
    pub structure: Option<String>,
    #[serde(default)]
    pub entry_point: Option<String>,
    #[serde(default)]
    pub build_command: Option<String>,
}

/// 요청 단위로 생성되는 Dockerfile 생성 입력.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// 대상 언어(자유 텍스트, 지식 베이스 키로 제한하지 않음)
    pub language: String,
    pub specifications: Option<String>,
    /// 명시적으로 전달된 저장소 메타데이터
    pub repository: Option<RepositoryMetadata>,
    /// 메타데이터 해석 대상 저장소 URL
    pub repo_url: Option<String>,
    pub include_comments: Option<bool>,
}

impl GenerationRequest {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }
}

/// 모델이 반환한 Dockerfile 텍스트와 선택적 설명.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockerfileArtifact {
    pub dockerfile: String,
    pub explanation: Option<String>,
}
