//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, ModelConfig};
use crate::application::error::ModelError;
use crate::domain::generation::RepositoryMetadata;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self, overrides: &Config) -> Result<String>;
}

/// 프롬프트 한 건을 보내고 완성 텍스트 한 건을 받는 모델 호출 포트.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// 로그/진단용 모델 식별자
    fn model(&self) -> &str;
    /// `timeout`이 `None`이면 호출자가 시간 제한을 두지 않는다.
    async fn complete(&self, prompt: &str, timeout: Option<Duration>)
    -> Result<String, ModelError>;
}

/// 모델 설정에 맞는 클라이언트를 생성하는 팩토리 포트.
pub trait ModelClientFactory: Send + Sync {
    fn build(&self, config: &ModelConfig) -> Result<Box<dyn ModelClient>>;
}

/// 저장소 URL을 메타데이터로 해석하는 포트.
#[async_trait]
pub trait RepositoryResolver: Send + Sync {
    async fn resolve(&self, url: &str) -> Option<RepositoryMetadata>;
}
