//! 라우터와 핸들러.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tracing::info;

use super::dto::LanguageRequest;
use super::error::ApiError;
use crate::domain::generation::DockerfileArtifact;
use crate::interface::composition::AppComposition;

/// API 라우터를 구성한다. CORS는 모든 origin/method/header를 허용한다.
pub fn router(app: Arc<AppComposition>) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/explain", post(explain))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::very_permissive())
        .with_state(app)
}

async fn generate(
    State(app): State<Arc<AppComposition>>,
    payload: Result<Json<LanguageRequest>, JsonRejection>,
) -> Result<Json<DockerfileArtifact>, ApiError> {
    let Json(body) = payload?;
    info!(language = %body.language, "generate request");

    let artifact = app.generate_usecase().execute(body.into()).await?;
    Ok(Json(artifact))
}

async fn explain(
    State(app): State<Arc<AppComposition>>,
    payload: Result<Json<LanguageRequest>, JsonRejection>,
) -> Result<Json<DockerfileArtifact>, ApiError> {
    let Json(body) = payload?;
    info!(language = %body.language, "explain request");

    let artifact = app.explain_usecase().execute(body.into()).await?;
    Ok(Json(artifact))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
