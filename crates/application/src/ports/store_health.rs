use async_trait::async_trait;
use pagevisits_domain::DomainError;

#[async_trait]
pub trait StoreHealthPort: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
}
