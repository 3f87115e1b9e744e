//! 언어/요구사항 입력으로 Dockerfile을 생성하는 유스케이스.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::application::error::GenerationError;
use crate::application::ports::{ModelClient, RepositoryResolver};
use crate::domain::generation::{DockerfileArtifact, GenerationRequest};
use crate::domain::prompt::build_request_prompt;

/// 프롬프트 구성 → 모델 호출 순서로 Dockerfile 한 건을 만든다.
pub struct GenerateDockerfileUseCase<'a> {
    pub model_client: &'a dyn ModelClient,
    pub repository_resolver: &'a dyn RepositoryResolver,
    pub timeout: Option<Duration>,
}

impl<'a> GenerateDockerfileUseCase<'a> {
    /// 저장소 메타데이터를 채운 뒤 최종 프롬프트를 만든다.
    /// 요청에 메타데이터가 직접 들어 있으면 URL 해석보다 우선한다.
    pub async fn build_prompt(&self, mut request: GenerationRequest) -> String {
        if request.repository.is_none()
            && let Some(url) = request.repo_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
        {
            request.repository = self.repository_resolver.resolve(url).await;
            if request.repository.is_none() {
                debug!(repo_url = url, "no repository metadata resolved");
            }
        }

        build_request_prompt(&request)
    }

    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<DockerfileArtifact, GenerationError> {
        let language = request.language.clone();
        let prompt = self.build_prompt(request).await;
        debug!(
            language = %language,
            prompt_chars = prompt.len(),
            "built dockerfile prompt"
        );

        let started = Instant::now();
        let dockerfile = self
            .model_client
            .complete(&prompt, self.timeout)
            .await
            .inspect_err(|err| warn!(language = %language, "dockerfile generation failed: {err}"))?;

        info!(
            language = %language,
            model = self.model_client.model(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dockerfile generated"
        );

        Ok(DockerfileArtifact {
            dockerfile,
            explanation: None,
        })
    }
}
