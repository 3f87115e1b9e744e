//! HTTP 요청 본문 스키마.

use serde::Deserialize;

use crate::domain::generation::{GenerationRequest, RepositoryMetadata};

/// `/api/generate`, `/api/explain` 공통 요청 본문.
/// `language`만 필수이며 나머지는 생략 가능하다.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub include_comments: Option<bool>,
    #[serde(default)]
    pub repository: Option<RepositoryMetadata>,
}

impl From<LanguageRequest> for GenerationRequest {
    fn from(body: LanguageRequest) -> Self {
        GenerationRequest {
            language: body.language,
            specifications: body.specifications,
            repository: body.repository,
            repo_url: body.repo_url,
            include_comments: body.include_comments,
        }
    }
}
