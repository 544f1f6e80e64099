use async_trait::async_trait;
use pagevisits_domain::{CanonicalUrl, DomainError, NewVisit, PageRequest, Visit, VisitMetrics};

/// Append-only visit log.
#[async_trait]
pub trait VisitStore: Send + Sync {
    async fn insert_one(&self, url_id: i64, visit: &NewVisit) -> Result<Visit, DomainError>;

    /// Resolves every distinct URL, then writes every row, all in one
    /// transaction. Either all rows are persisted or none are.
    async fn insert_batch(&self, visits: &[NewVisit]) -> Result<u64, DomainError>;

    /// Most recent first, ties broken by descending id. Unknown URLs yield
    /// an empty page with a total of 0.
    async fn query_by_url(
        &self,
        url: &CanonicalUrl,
        page: PageRequest,
    ) -> Result<(Vec<Visit>, u64), DomainError>;

    async fn latest_by_url(&self, url: &CanonicalUrl) -> Result<Option<Visit>, DomainError>;

    async fn metrics_by_url(&self, url: &CanonicalUrl) -> Result<VisitMetrics, DomainError>;
}
