//! Dockerfile 생성 후 설명까지 요청하는 유스케이스.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::error::GenerationError;
use crate::application::ports::ModelClient;
use crate::application::usecases::generate_dockerfile::GenerateDockerfileUseCase;
use crate::domain::explanation::build_explanation_prompt;
use crate::domain::generation::{DockerfileArtifact, GenerationRequest};

pub struct ExplainDockerfileUseCase<'a> {
    pub generate: GenerateDockerfileUseCase<'a>,
    pub model_client: &'a dyn ModelClient,
    pub timeout: Option<Duration>,
}

impl<'a> ExplainDockerfileUseCase<'a> {
    /// 생성 → 설명 순서로 모델을 두 번 호출한다.
    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<DockerfileArtifact, GenerationError> {
        let generated = self.generate.execute(request).await?;
        let explanation = self.explain(&generated.dockerfile).await?;

        Ok(DockerfileArtifact {
            dockerfile: generated.dockerfile,
            explanation: Some(explanation),
        })
    }

    /// 이미 있는 Dockerfile 텍스트의 설명만 요청한다.
    pub async fn explain(&self, dockerfile: &str) -> Result<String, GenerationError> {
        let prompt = build_explanation_prompt(dockerfile);
        debug!(prompt_chars = prompt.len(), "built explanation prompt");

        let explanation = self
            .model_client
            .complete(&prompt, self.timeout)
            .await
            .inspect_err(|err| warn!("dockerfile explanation failed: {err}"))?;

        info!(
            model = self.model_client.model(),
            explanation_chars = explanation.len(),
            "dockerfile explained"
        );
        Ok(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ModelError;
    use crate::application::usecases::generate_dockerfile::tests::{FixedResolver, ScriptedModel};

    fn usecase<'a>(
        model: &'a ScriptedModel,
        resolver: &'a FixedResolver,
    ) -> ExplainDockerfileUseCase<'a> {
        ExplainDockerfileUseCase {
            generate: GenerateDockerfileUseCase {
                model_client: model,
                repository_resolver: resolver,
                timeout: None,
            },
            model_client: model,
            timeout: None,
        }
    }

    #[tokio::test]
    async fn explains_the_generated_dockerfile() {
        let model = ScriptedModel::new(vec![
            Ok("FROM python:3.12-slim".to_string()),
            Ok("This image uses a slim base.".to_string()),
        ]);
        let resolver = FixedResolver(None);

        let artifact = usecase(&model, &resolver)
            .execute(GenerationRequest::new("Python"))
            .await
            .unwrap();

        assert_eq!(artifact.dockerfile, "FROM python:3.12-slim");
        assert_eq!(
            artifact.explanation.as_deref(),
            Some("This image uses a slim base.")
        );

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[1], build_explanation_prompt("FROM python:3.12-slim"));
    }

    #[tokio::test]
    async fn generation_failure_skips_explanation() {
        let model = ScriptedModel::new(vec![Err(ModelError::Timeout { millis: 30_000 })]);
        let resolver = FixedResolver(None);

        let err = usecase(&model, &resolver)
            .execute(GenerationRequest::new("Go"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerationError::ModelUnavailable(ModelError::Timeout { millis: 30_000 })
        ));
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn explanation_failure_is_propagated() {
        let model = ScriptedModel::new(vec![
            Ok("FROM golang:1.23-alpine".to_string()),
            Err(ModelError::Api {
                status: 500,
                message: "out of memory".to_string(),
            }),
        ]);
        let resolver = FixedResolver(None);

        let err = usecase(&model, &resolver)
            .execute(GenerationRequest::new("Go"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("out of memory"));
    }
}
