use pagevisits_infrastructure::database::SqliteStoreHealth;
use pagevisits_infrastructure::repositories::{SqliteUrlRegistry, SqliteVisitRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub url_registry: Arc<SqliteUrlRegistry>,
    pub visits: Arc<SqliteVisitRepository>,
    pub health: Arc<SqliteStoreHealth>,
}

impl Repositories {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            url_registry: Arc::new(SqliteUrlRegistry::new(write_pool.clone(), read_pool.clone())),
            visits: Arc::new(SqliteVisitRepository::new(write_pool, read_pool.clone())),
            health: Arc::new(SqliteStoreHealth::new(read_pool)),
        }
    }
}
