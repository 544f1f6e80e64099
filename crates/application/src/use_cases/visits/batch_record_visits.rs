use pagevisits_domain::config::BatchPolicy;
use pagevisits_domain::{DomainError, NewVisit, ValidationErrors, VisitSubmission};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::VisitStore;

/// An item left out of a batch, by its position in the submitted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedItem {
    pub index: usize,
    pub errors: ValidationErrors,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub created_count: u64,
    pub rejected: Vec<RejectedItem>,
}

pub struct BatchRecordVisitsUseCase {
    store: Arc<dyn VisitStore>,
    policy: BatchPolicy,
    max_batch_size: usize,
}

impl BatchRecordVisitsUseCase {
    pub fn new(store: Arc<dyn VisitStore>, policy: BatchPolicy, max_batch_size: usize) -> Self {
        Self {
            store,
            policy,
            max_batch_size,
        }
    }

    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    #[instrument(skip(self, submissions), fields(batch_size = submissions.len(), policy = ?self.policy))]
    pub async fn execute(
        &self,
        submissions: Vec<VisitSubmission>,
    ) -> Result<BatchOutcome, DomainError> {
        if submissions.len() > self.max_batch_size {
            return Err(DomainError::Validation(ValidationErrors::single(
                "visits",
                "batch_too_large",
                format!(
                    "A batch cannot contain more than {} visits (got {})",
                    self.max_batch_size,
                    submissions.len()
                ),
            )));
        }

        let mut valid: Vec<NewVisit> = Vec::with_capacity(submissions.len());
        let mut rejected = Vec::new();
        for (index, submission) in submissions.iter().enumerate() {
            match submission.normalize() {
                Ok(visit) => valid.push(visit),
                Err(errors) => rejected.push(RejectedItem { index, errors }),
            }
        }

        if !rejected.is_empty() && self.policy == BatchPolicy::RejectAll {
            let mut all = ValidationErrors::new();
            for item in rejected {
                all.merge_prefixed(&format!("visits[{}]", item.index), item.errors);
            }
            return Err(DomainError::Validation(all));
        }

        if !rejected.is_empty() {
            warn!(
                rejected = rejected.len(),
                accepted = valid.len(),
                "Skipping invalid visits in batch"
            );
        }

        let created_count = if valid.is_empty() {
            0
        } else {
            self.store.insert_batch(&valid).await?
        };

        info!(created_count, "Visit batch recorded");

        Ok(BatchOutcome {
            created_count,
            rejected,
        })
    }
}
