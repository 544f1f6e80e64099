use async_trait::async_trait;
use pagevisits_application::ports::StoreHealthPort;
use pagevisits_domain::DomainError;
use sqlx::SqlitePool;

pub struct SqliteStoreHealth {
    pool: SqlitePool,
}

impl SqliteStoreHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealthPort for SqliteStoreHealth {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}
