//! 로컬 Ollama 모델 서버 연동 모듈.
//! `/api/chat` 비스트리밍 호출로 프롬프트 한 건의 완성 텍스트를 받는다.

mod client;
mod wire;

pub use client::OllamaClient;
