mod helpers;
mod reader;
mod writer;

use async_trait::async_trait;
use pagevisits_application::ports::VisitStore;
use pagevisits_domain::{CanonicalUrl, DomainError, NewVisit, PageRequest, Visit, VisitMetrics};
use sqlx::SqlitePool;

/// Visit log over SQLite. Writes go through `write_pool`, reads through
/// `read_pool`; both may be the same pool.
pub struct SqliteVisitRepository {
    write_pool: SqlitePool,
    read_pool: SqlitePool,
}

impl SqliteVisitRepository {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            write_pool,
            read_pool,
        }
    }
}

#[async_trait]
impl VisitStore for SqliteVisitRepository {
    async fn insert_one(&self, url_id: i64, visit: &NewVisit) -> Result<Visit, DomainError> {
        writer::insert_one(&self.write_pool, url_id, visit).await
    }

    async fn insert_batch(&self, visits: &[NewVisit]) -> Result<u64, DomainError> {
        writer::insert_batch(&self.write_pool, visits).await
    }

    async fn query_by_url(
        &self,
        url: &CanonicalUrl,
        page: PageRequest,
    ) -> Result<(Vec<Visit>, u64), DomainError> {
        reader::query_by_url(&self.read_pool, url, page).await
    }

    async fn latest_by_url(&self, url: &CanonicalUrl) -> Result<Option<Visit>, DomainError> {
        reader::latest_by_url(&self.read_pool, url).await
    }

    async fn metrics_by_url(&self, url: &CanonicalUrl) -> Result<VisitMetrics, DomainError> {
        reader::metrics_by_url(&self.read_pool, url).await
    }
}
