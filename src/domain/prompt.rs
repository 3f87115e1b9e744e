//! Dockerfile 생성 프롬프트 구성 정책.
//!
//! 같은 입력은 항상 같은 프롬프트를 만든다. 섹션 순서는
//! Role → Objective → Context → Instructions → Notes 로 고정이다.

use crate::domain::generation::{GenerationRequest, RepositoryMetadata};
use crate::domain::knowledge;

const ROLE: &str = "You are a senior DevOps engineer and Docker expert who writes secure, efficient, production-grade Dockerfiles.";

const PRODUCTION_PRINCIPLES: &str = "The Dockerfile must adhere to the following principles for robust production deployment:
  - Security: use minimal base images, run as a non-root user when possible, and include only necessary components.
  - Efficiency: leverage multi-stage builds, optimize layer caching for faster rebuilds, and keep the final image as small as possible.
  - Reliability: include the environment configuration the application needs, and consider health checks if applicable.
  - Maintainability: structure the Dockerfile logically.";

const REQUIRED_COMPONENTS: &str = "Include the following essential components:
  1. Base image selection: a suitable, versioned base image.
  2. Working directory: a dedicated working directory.
  3. Dependency management: copy dependency manifests first to optimize layer caching, then install dependencies.
  4. Source code: copy the application source code.
  5. Build process: compile or build the application if necessary (e.g., `npm run build`, `dotnet publish`, `mvn package`, `cargo build --release`).
  6. Runtime configuration: set the environment variables required in production.
  7. User: define a non-root user for running the application in the final stage.
  8. Port exposure: expose the port(s) the application listens on.
  9. Entry point/command: define how the application starts.";

const OUTPUT_DIRECTIVES: [&str; 3] = [
    "Generate ONLY the complete, executable Dockerfile content.",
    "Do not include any introductory or concluding remarks, explanations, or markdown formatting outside of the Dockerfile content itself.",
    "Ensure the Dockerfile is ready to be saved and built directly.",
];

const COMMENTS_DIRECTIVE: &str =
    "Add a concise `#` comment above each Dockerfile instruction explaining its purpose.";

const REPOSITORY_OVERRIDE: &str = "Facts derived from the repository analysis override any generic assumption above (base image, dependency files, build command, entry point).";

const SPECIFICATIONS_NOTE: &str = "User specifications take precedence over the general best practices and language defaults whenever they conflict.";

const REPOSITORY_NOTE: &str =
    "Repository-derived facts take precedence over generic assumptions about the language stack.";

const NOT_AVAILABLE: &str = "N/A";

/// 평문으로 펼치기 전의 구조화된 프롬프트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    pub role: String,
    pub objective: String,
    pub context: Vec<String>,
    pub instructions: Vec<String>,
    pub notes: Vec<String>,
}

impl PromptDocument {
    /// 입력값으로부터 섹션별 항목을 구성한다.
    pub fn build(
        language: &str,
        specifications: Option<&str>,
        repository: Option<&RepositoryMetadata>,
        include_comments: Option<bool>,
    ) -> Self {
        let specifications = specifications.map(str::trim).filter(|s| !s.is_empty());

        let mut context = vec![
            PRODUCTION_PRINCIPLES.to_string(),
            REQUIRED_COMPONENTS.to_string(),
        ];
        if let Some(guidance) = knowledge::lookup(language) {
            context.push(guidance.to_string());
        }
        if let Some(repo) = repository {
            context.push(render_repository(repo));
            context.push(REPOSITORY_OVERRIDE.to_string());
        }

        let mut instructions: Vec<String> =
            OUTPUT_DIRECTIVES.iter().map(|s| s.to_string()).collect();
        if include_comments == Some(true) {
            instructions.push(COMMENTS_DIRECTIVE.to_string());
        }
        if let Some(spec) = specifications {
            instructions.push(render_specifications(spec));
        }

        let mut notes = Vec::new();
        if specifications.is_some() {
            notes.push(SPECIFICATIONS_NOTE.to_string());
        }
        if repository.is_some() {
            notes.push(REPOSITORY_NOTE.to_string());
        }

        Self {
            role: ROLE.to_string(),
            objective: format!("Generate a PRODUCTION-READY Dockerfile for a {language} application."),
            context,
            instructions,
            notes,
        }
    }

    /// 비어 있지 않은 섹션을 고정 순서로 펼친다.
    pub fn render(&self) -> String {
        let role = [self.role.clone()];
        let objective = [self.objective.clone()];
        let sections: [(&str, &[String]); 5] = [
            ("Role", role.as_slice()),
            ("Objective", objective.as_slice()),
            ("Context", self.context.as_slice()),
            ("Instructions", self.instructions.as_slice()),
            ("Notes", self.notes.as_slice()),
        ];

        sections
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(heading, entries)| {
                let mut block = format!("{heading}:");
                for entry in entries {
                    block.push_str("\n- ");
                    block.push_str(entry);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// 생성 요청에서 Dockerfile 프롬프트를 만든다.
pub fn build_request_prompt(request: &GenerationRequest) -> String {
    build_dockerfile_prompt(
        &request.language,
        request.specifications.as_deref(),
        request.repository.as_ref(),
        request.include_comments,
    )
}

pub fn build_dockerfile_prompt(
    language: &str,
    specifications: Option<&str>,
    repository: Option<&RepositoryMetadata>,
    include_comments: Option<bool>,
) -> String {
    PromptDocument::build(language, specifications, repository, include_comments).render()
}

fn render_repository(repo: &RepositoryMetadata) -> String {
    let dependencies = repo
        .dependencies
        .as_ref()
        .filter(|deps| !deps.is_empty())
        .map(|deps| deps.join(", "));

    let mut out = String::from("Repository analysis for this project:");
    for (label, value) in [
        ("Detected language", repo.detected_language.as_deref()),
        ("Dependencies", dependencies.as_deref()),
        ("Structure", repo.structure.as_deref()),
        ("Entry point", repo.entry_point.as_deref()),
        ("Build command", repo.build_command.as_deref()),
    ] {
        out.push_str(&format!("\n  - {label}: {}", value.unwrap_or(NOT_AVAILABLE)));
    }
    out
}

fn render_specifications(spec: &str) -> String {
    let mut out =
        String::from("The following user specifications are MANDATORY and must all be satisfied:");
    // 빈 줄도 항목 하나로 유지한다.
    for line in spec.split('\n') {
        out.push_str("\n  - ");
        out.push_str(line);
    }
    out
}
