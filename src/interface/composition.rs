//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::config::Config;
use crate::application::ports::{
    ConfigRepository, ModelClient, ModelClientFactory, RepositoryResolver,
};
use crate::application::usecases::explain_dockerfile::ExplainDockerfileUseCase;
use crate::application::usecases::generate_dockerfile::GenerateDockerfileUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    JsonConfigRepository, OllamaClientFactory, UrlRepositoryResolver,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 요청 간 공유 상태는 읽기 전용 설정과 포트 구현체뿐이다.
pub struct AppComposition {
    config: Config,
    model_client: Arc<dyn ModelClient>,
    repository_resolver: Arc<dyn RepositoryResolver>,
}

impl AppComposition {
    /// 설정 파일을 병합하고 CLI 덮어쓰기 값을 적용한 뒤 기본 어댑터로 조립한다.
    pub fn load(overrides: Config) -> Result<Self> {
        let config_repo = JsonConfigRepository;
        let mut config = config_repo.load().context("failed to load configuration")?;
        config.merge_from(overrides);

        let model_client = OllamaClientFactory
            .build(&config.model)
            .context("failed to configure model client")?;

        Ok(Self {
            config,
            model_client: Arc::from(model_client),
            repository_resolver: Arc::new(UrlRepositoryResolver),
        })
    }

    /// 포트 구현체를 외부에서 주입한다.
    pub fn with_components(
        config: Config,
        model_client: Arc<dyn ModelClient>,
        repository_resolver: Arc<dyn RepositoryResolver>,
    ) -> Self {
        Self {
            config,
            model_client,
            repository_resolver,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dockerfile 생성 유스케이스를 생성한다.
    pub fn generate_usecase(&self) -> GenerateDockerfileUseCase<'_> {
        GenerateDockerfileUseCase {
            model_client: self.model_client.as_ref(),
            repository_resolver: self.repository_resolver.as_ref(),
            timeout: self.config.model_timeout(),
        }
    }

    /// 생성 + 설명 유스케이스를 생성한다.
    pub fn explain_usecase(&self) -> ExplainDockerfileUseCase<'_> {
        ExplainDockerfileUseCase {
            generate: self.generate_usecase(),
            model_client: self.model_client.as_ref(),
            timeout: self.config.model_timeout(),
        }
    }
}

/// 모델 클라이언트 없이 설정 점검 유스케이스를 실행한다.
pub fn inspect_config(overrides: &Config) -> Result<String> {
    InspectConfigUseCase {
        config_repo: &JsonConfigRepository,
        overrides,
    }
    .execute()
}
