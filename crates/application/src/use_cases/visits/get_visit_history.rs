use pagevisits_domain::{CanonicalUrl, DomainError, HistoryPage, PageRequest, ValidationErrors};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{UrlRegistry, VisitStore};

pub struct GetVisitHistoryUseCase {
    registry: Arc<dyn UrlRegistry>,
    store: Arc<dyn VisitStore>,
    max_page_size: u32,
}

impl GetVisitHistoryUseCase {
    pub fn new(
        registry: Arc<dyn UrlRegistry>,
        store: Arc<dyn VisitStore>,
        max_page_size: u32,
    ) -> Self {
        Self {
            registry,
            store,
            max_page_size,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        url: &str,
        page: u32,
        page_size: u32,
    ) -> Result<HistoryPage, DomainError> {
        let url = CanonicalUrl::for_lookup(url);
        let request = PageRequest::new(page, page_size, self.max_page_size);

        let (url, request) = match (url, request) {
            (Ok(url), Ok(request)) => (url, request),
            (url, request) => {
                let mut errors = ValidationErrors::new();
                for e in [url.err(), request.err()].into_iter().flatten() {
                    for v in e.violations() {
                        errors.push(v.field.clone(), v.code, v.message.clone());
                    }
                }
                return Err(DomainError::Validation(errors));
            }
        };

        if self.registry.find(&url).await?.is_none() {
            debug!(url = %url, "No visits recorded for URL");
            return Ok(HistoryPage::new(Vec::new(), 0, request));
        }

        let (items, total) = self.store.query_by_url(&url, request).await?;
        debug!(url = %url, returned = items.len(), total, "Visit history retrieved");

        Ok(HistoryPage::new(items, total, request))
    }
}
