use pagevisits_application::use_cases::{
    BatchRecordVisitsUseCase, CheckHealthUseCase, GetLatestVisitUseCase, GetVisitHistoryUseCase,
    GetVisitMetricsUseCase, RecordVisitUseCase,
};
use std::sync::Arc;

use crate::middleware::RateLimiters;

#[derive(Clone)]
pub struct VisitHandlers {
    pub record: Arc<RecordVisitUseCase>,
    pub batch_record: Arc<BatchRecordVisitsUseCase>,
    pub get_history: Arc<GetVisitHistoryUseCase>,
    pub get_metrics: Arc<GetVisitMetricsUseCase>,
    pub get_latest: Arc<GetLatestVisitUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub visits: VisitHandlers,
    pub check_health: Arc<CheckHealthUseCase>,
    /// `None` disables rate limiting.
    pub rate_limiters: Option<Arc<RateLimiters>>,
    pub default_page_size: u32,
}
