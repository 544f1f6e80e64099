use super::Repositories;
use pagevisits_api::{middleware::RateLimiters, AppState, VisitHandlers};
use pagevisits_application::use_cases::{
    BatchRecordVisitsUseCase, CheckHealthUseCase, GetLatestVisitUseCase, GetVisitHistoryUseCase,
    GetVisitMetricsUseCase, RecordVisitUseCase,
};
use pagevisits_domain::config::VisitsConfig;
use pagevisits_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub record_visit: Arc<RecordVisitUseCase>,
    pub batch_record_visits: Arc<BatchRecordVisitsUseCase>,
    pub get_history: Arc<GetVisitHistoryUseCase>,
    pub get_metrics: Arc<GetVisitMetricsUseCase>,
    pub get_latest: Arc<GetLatestVisitUseCase>,
    pub check_health: Arc<CheckHealthUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, visits: &VisitsConfig, version: &'static str) -> Self {
        Self {
            record_visit: Arc::new(RecordVisitUseCase::new(
                repos.url_registry.clone(),
                repos.visits.clone(),
            )),
            batch_record_visits: Arc::new(BatchRecordVisitsUseCase::new(
                repos.visits.clone(),
                visits.batch_policy,
                visits.max_batch_size,
            )),
            get_history: Arc::new(GetVisitHistoryUseCase::new(
                repos.url_registry.clone(),
                repos.visits.clone(),
                visits.max_page_size,
            )),
            get_metrics: Arc::new(GetVisitMetricsUseCase::new(
                repos.url_registry.clone(),
                repos.visits.clone(),
            )),
            get_latest: Arc::new(GetLatestVisitUseCase::new(
                repos.url_registry.clone(),
                repos.visits.clone(),
            )),
            check_health: Arc::new(CheckHealthUseCase::new(repos.health.clone(), version)),
        }
    }

    pub fn into_app_state(self, config: &Config) -> AppState {
        AppState {
            visits: VisitHandlers {
                record: self.record_visit,
                batch_record: self.batch_record_visits,
                get_history: self.get_history,
                get_metrics: self.get_metrics,
                get_latest: self.get_latest,
            },
            check_health: self.check_health,
            rate_limiters: RateLimiters::from_config(&config.rate_limit).map(Arc::new),
            default_page_size: config.visits.default_page_size,
        }
    }
}
