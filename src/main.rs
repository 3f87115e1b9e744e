//! `dockergen` 바이너리 진입점.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use dockergen::domain::knowledge;
use dockergen::interface::cli::{Cli, CliAction, CliInvocation};
use dockergen::interface::composition::{AppComposition, inspect_config};
use dockergen::interface::http;

#[tokio::main]
async fn main() {
    let invocation = Cli::parse_action();

    // 서버는 요청 로그를 보여주고, 일회성 명령은 stdout 출력만 남긴다.
    let default_filter = match invocation.action {
        CliAction::Serve => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(invocation).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(invocation: CliInvocation) -> Result<()> {
    let CliInvocation { action, overrides } = invocation;

    match action {
        CliAction::InspectConfig => println!("{}", inspect_config(&overrides)?),
        CliAction::Languages => {
            for language in knowledge::supported_languages() {
                println!("{language}");
            }
        }
        CliAction::Prompt(request) => {
            let app = AppComposition::load(overrides)?;
            println!("{}", app.generate_usecase().build_prompt(request).await);
        }
        CliAction::Serve => {
            let app = AppComposition::load(overrides)?;
            http::serve(Arc::new(app)).await?;
        }
        CliAction::Generate { request, explain } => {
            let app = AppComposition::load(overrides)?;
            if explain {
                let artifact = app.explain_usecase().execute(request).await?;
                println!("{}", artifact.dockerfile);
                if let Some(explanation) = artifact.explanation {
                    println!();
                    println!("==================== Explanation ====================");
                    println!("{explanation}");
                }
            } else {
                let artifact = app.generate_usecase().execute(request).await?;
                println!("{}", artifact.dockerfile);
            }
        }
        CliAction::Explain { file } => {
            let dockerfile = fs::read_to_string(&file)
                .with_context(|| format!("failed to read Dockerfile at {}", file.display()))?;
            let app = AppComposition::load(overrides)?;
            println!("{}", app.explain_usecase().explain(&dockerfile).await?);
        }
    }

    Ok(())
}
