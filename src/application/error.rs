//! 애플리케이션 계층 오류 타입.

use thiserror::Error;

/// 모델 호출 포트의 실패 유형.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model server at {endpoint} is unreachable: {message}")]
    Unavailable { endpoint: String, message: String },

    /// 호출자가 지정한 시간 제한을 넘긴 경우에만 사용한다.
    #[error("model request timed out after {millis}ms")]
    Timeout { millis: u64 },

    #[error("model API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid model response: {message}")]
    InvalidResponse { message: String },
}

/// 생성/설명 유스케이스 실패.
/// 모델 호출 실패 유형은 구분하지 않고 하나로 묶어 전달한다.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),
}
