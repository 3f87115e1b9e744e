//! HTTP 인터페이스 모듈.
//! `/api/generate`, `/api/explain` 두 엔드포인트를 axum 라우터로 노출한다.

mod dto;
mod error;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::interface::composition::AppComposition;

pub use dto::LanguageRequest;
pub use error::ApiError;
pub use routes::router;

/// 설정된 주소에 바인딩하고 Ctrl-C 신호까지 요청을 처리한다.
pub async fn serve(app: Arc<AppComposition>) -> Result<()> {
    let addr = app.config().bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;
    info!(
        address = %listener.local_addr()?,
        model = %app.config().model_name(),
        "dockergen API listening"
    );

    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // 신호 등록에 실패하면 종료 신호 없이 계속 서비스한다.
        warn!("failed to install Ctrl-C handler: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
