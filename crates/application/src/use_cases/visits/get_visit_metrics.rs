use pagevisits_domain::{CanonicalUrl, DomainError, VisitMetrics};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::{UrlRegistry, VisitStore};

pub struct GetVisitMetricsUseCase {
    registry: Arc<dyn UrlRegistry>,
    store: Arc<dyn VisitStore>,
}

impl GetVisitMetricsUseCase {
    pub fn new(registry: Arc<dyn UrlRegistry>, store: Arc<dyn VisitStore>) -> Self {
        Self { registry, store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<VisitMetrics, DomainError> {
        let url = CanonicalUrl::for_lookup(url)?;
        match self.registry.find(&url).await? {
            Some(_) => self.store.metrics_by_url(&url).await,
            None => Ok(VisitMetrics { total_visits: 0 }),
        }
    }
}
