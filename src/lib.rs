//! dockergen library root.
//! Clean Architecture 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::Config;
use domain::generation::{DockerfileArtifact, GenerationRequest};
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 생성 함수. 병합된 설정 파일을 그대로 사용한다.
pub async fn generate(request: GenerationRequest) -> Result<DockerfileArtifact> {
    let composition = AppComposition::load(Config::default())?;
    Ok(composition.generate_usecase().execute(request).await?)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    interface::composition::inspect_config(&Config::default())
}
