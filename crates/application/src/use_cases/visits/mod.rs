mod batch_record_visits;
mod get_latest_visit;
mod get_visit_history;
mod get_visit_metrics;
mod record_visit;

pub use batch_record_visits::{BatchOutcome, BatchRecordVisitsUseCase, RejectedItem};
pub use get_latest_visit::GetLatestVisitUseCase;
pub use get_visit_history::GetVisitHistoryUseCase;
pub use get_visit_metrics::GetVisitMetricsUseCase;
pub use record_visit::RecordVisitUseCase;
