//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::config::Config;
use crate::domain::generation::GenerationRequest;

#[derive(Debug, Parser)]
#[command(name = "dockergen", version)]
#[command(about = "Production Dockerfile generator backed by a local LLM")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Model identifier (overrides config)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Model request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address (default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (default 8000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate a Dockerfile with the model
    Generate {
        #[command(flatten)]
        input: PromptArgs,
        /// Also request an explanation of the generated Dockerfile
        #[arg(long)]
        explain: bool,
    },
    /// Print the generation prompt without calling the model
    Prompt {
        #[command(flatten)]
        input: PromptArgs,
    },
    /// Explain an existing Dockerfile
    Explain {
        /// Dockerfile path
        #[arg(long, value_name = "PATH", default_value = "Dockerfile")]
        file: PathBuf,
    },
    /// List languages with built-in best-practice guidance
    Languages,
    /// Show effective merged config
    Config,
}

#[derive(Debug, Args)]
struct PromptArgs {
    /// Target language (e.g. "Node.js", "Python", "Go")
    #[arg(long, short)]
    language: String,

    /// Additional requirement; repeat for several lines
    #[arg(long = "spec", short = 's', value_name = "TEXT")]
    specifications: Vec<String>,

    /// Repository URL to analyze
    #[arg(long)]
    repo_url: Option<String>,

    /// Ask for explanatory comments on each instruction
    #[arg(long)]
    comments: bool,
}

pub enum CliAction {
    Serve,
    Generate {
        request: GenerationRequest,
        explain: bool,
    },
    Prompt(GenerationRequest),
    Explain {
        file: PathBuf,
    },
    Languages,
    InspectConfig,
}

/// 파싱된 동작과 설정 덮어쓰기 값.
pub struct CliInvocation {
    pub action: CliAction,
    pub overrides: Config,
}

impl Cli {
    /// 인자 오류는 clap이 처리하고 종료 코드 2로 끝낸다.
    pub fn parse_action() -> CliInvocation {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> CliInvocation {
        let mut overrides = Config::default();
        overrides.model.model = self.model;
        overrides.model.timeout_secs = self.timeout_secs;

        let action = match self.command {
            Commands::Serve { host, port } => {
                overrides.server.host = host;
                overrides.server.port = port;
                CliAction::Serve
            }
            Commands::Generate { input, explain } => CliAction::Generate {
                request: input.into_request(),
                explain,
            },
            Commands::Prompt { input } => CliAction::Prompt(input.into_request()),
            Commands::Explain { file } => CliAction::Explain { file },
            Commands::Languages => CliAction::Languages,
            Commands::Config => CliAction::InspectConfig,
        };

        CliInvocation { action, overrides }
    }
}

impl PromptArgs {
    /// 언어 이름은 HTTP 요청과 마찬가지로 검증 없이 그대로 전달한다.
    fn into_request(self) -> GenerationRequest {
        let specifications = if self.specifications.is_empty() {
            None
        } else {
            Some(self.specifications.join("\n"))
        };

        GenerationRequest {
            language: self.language,
            specifications,
            repository: None,
            repo_url: self.repo_url,
            include_comments: self.comments.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> CliInvocation {
        Cli::try_parse_from(args).unwrap().into_invocation()
    }

    #[test]
    fn serve_flags_become_overrides() {
        let inv = invocation(&["dockergen", "serve", "--port", "9000", "--model", "phi3"]);
        assert!(matches!(inv.action, CliAction::Serve));
        assert_eq!(inv.overrides.port(), 9000);
        assert_eq!(inv.overrides.host(), "0.0.0.0");
        assert_eq!(inv.overrides.model_name(), "phi3");
    }

    #[test]
    fn repeated_specs_are_joined_by_newline() {
        let inv = invocation(&[
            "dockergen",
            "prompt",
            "-l",
            "Python",
            "-s",
            "use gunicorn",
            "--spec",
            "expose 9000",
            "--comments",
        ]);

        let CliAction::Prompt(request) = inv.action else {
            panic!("expected prompt action");
        };
        assert_eq!(request.language, "Python");
        assert_eq!(
            request.specifications.as_deref(),
            Some("use gunicorn\nexpose 9000")
        );
        assert_eq!(request.include_comments, Some(true));
    }

    #[test]
    fn generate_without_flags_leaves_options_unset() {
        let inv = invocation(&["dockergen", "generate", "--language", "Go"]);
        let CliAction::Generate { request, explain } = inv.action else {
            panic!("expected generate action");
        };
        assert!(!explain);
        assert!(request.specifications.is_none());
        assert!(request.include_comments.is_none());
    }

    #[test]
    fn blank_language_is_passed_through() {
        let inv = invocation(&["dockergen", "generate", "--language", "  "]);
        let CliAction::Generate { request, .. } = inv.action else {
            panic!("expected generate action");
        };
        assert_eq!(request.language, "  ");
    }

    #[test]
    fn missing_language_is_a_usage_error() {
        let err = Cli::try_parse_from(["dockergen", "prompt"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn explain_defaults_to_local_dockerfile() {
        let inv = invocation(&["dockergen", "explain"]);
        let CliAction::Explain { file } = inv.action else {
            panic!("expected explain action");
        };
        assert_eq!(file, PathBuf::from("Dockerfile"));
    }
}
