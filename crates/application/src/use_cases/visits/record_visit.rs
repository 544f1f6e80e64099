use pagevisits_domain::{DomainError, Visit, VisitSubmission};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{UrlRegistry, VisitStore};

pub struct RecordVisitUseCase {
    registry: Arc<dyn UrlRegistry>,
    store: Arc<dyn VisitStore>,
}

impl RecordVisitUseCase {
    pub fn new(registry: Arc<dyn UrlRegistry>, store: Arc<dyn VisitStore>) -> Self {
        Self { registry, store }
    }

    #[instrument(skip(self, submission), fields(url = %submission.url))]
    pub async fn execute(&self, submission: VisitSubmission) -> Result<Visit, DomainError> {
        let new_visit = submission.normalize()?;

        let url_id = self.registry.resolve_or_create(&new_visit.url).await?;
        let visit = self.store.insert_one(url_id, &new_visit).await?;

        info!(
            visit_id = visit.id,
            url_id,
            url = %visit.url,
            "Visit recorded"
        );

        Ok(visit)
    }
}
