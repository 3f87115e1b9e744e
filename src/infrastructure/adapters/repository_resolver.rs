//! 저장소 메타데이터 해석 포트 구현 어댑터.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::application::ports::RepositoryResolver;
use crate::domain::generation::RepositoryMetadata;

/// URL 형식만 확인하는 해석기.
/// 저장소 분석은 아직 구현되지 않았으므로 항상 메타데이터 없음으로 응답한다.
pub struct UrlRepositoryResolver;

#[async_trait]
impl RepositoryResolver for UrlRepositoryResolver {
    async fn resolve(&self, url: &str) -> Option<RepositoryMetadata> {
        match Url::parse(url) {
            Ok(parsed) => {
                debug!(
                    host = parsed.host_str().unwrap_or(""),
                    path = parsed.path(),
                    "repository analysis is not available; using generic prompt"
                );
            }
            Err(err) => warn!(repo_url = url, "ignoring invalid repository URL: {err}"),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn never_produces_metadata() {
        assert_eq!(
            UrlRepositoryResolver
                .resolve("https://github.com/acme/service")
                .await,
            None
        );
        assert_eq!(UrlRepositoryResolver.resolve("not a url").await, None);
    }
}
