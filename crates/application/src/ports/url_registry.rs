use async_trait::async_trait;
use pagevisits_domain::{CanonicalUrl, DomainError, PageUrl};

/// Maps each canonical URL string to a stable id.
#[async_trait]
pub trait UrlRegistry: Send + Sync {
    /// Returns the id for `url`, creating the entry if it does not exist yet.
    /// Concurrent callers for the same new URL all get the same id.
    async fn resolve_or_create(&self, url: &CanonicalUrl) -> Result<i64, DomainError>;

    async fn find(&self, url: &CanonicalUrl) -> Result<Option<PageUrl>, DomainError>;
}
