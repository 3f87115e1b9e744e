//! Domain layer
//! 프롬프트 구성 규칙과 언어별 지식 베이스를 외부 의존성 없이 표현한다.

pub mod explanation;
pub mod generation;
pub mod knowledge;
pub mod prompt;
