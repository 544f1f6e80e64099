use std::sync::Arc;
use std::time::Instant;
use tracing::error;

use crate::ports::StoreHealthPort;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub healthy: bool,
    pub version: &'static str,
    pub uptime_seconds: f64,
    pub database_connected: bool,
}

pub struct CheckHealthUseCase {
    store: Arc<dyn StoreHealthPort>,
    started_at: Instant,
    version: &'static str,
}

impl CheckHealthUseCase {
    pub fn new(store: Arc<dyn StoreHealthPort>, version: &'static str) -> Self {
        Self {
            store,
            started_at: Instant::now(),
            version,
        }
    }

    pub async fn execute(&self) -> HealthReport {
        let database_connected = match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Database health check failed");
                false
            }
        };

        HealthReport {
            healthy: database_connected,
            version: self.version,
            uptime_seconds: self.started_at.elapsed().as_secs_f64(),
            database_connected,
        }
    }
}
