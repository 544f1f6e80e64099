use pagevisits_domain::{CanonicalUrl, DomainError, Visit};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::{UrlRegistry, VisitStore};

pub struct GetLatestVisitUseCase {
    registry: Arc<dyn UrlRegistry>,
    store: Arc<dyn VisitStore>,
}

impl GetLatestVisitUseCase {
    pub fn new(registry: Arc<dyn UrlRegistry>, store: Arc<dyn VisitStore>) -> Self {
        Self { registry, store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<Option<Visit>, DomainError> {
        let url = CanonicalUrl::for_lookup(url)?;
        if self.registry.find(&url).await?.is_none() {
            return Ok(None);
        }
        self.store.latest_by_url(&url).await
    }
}
