//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod model_client_factory;
mod repository_resolver;

pub use config_repository::JsonConfigRepository;
pub use model_client_factory::OllamaClientFactory;
pub use repository_resolver::UrlRepositoryResolver;
