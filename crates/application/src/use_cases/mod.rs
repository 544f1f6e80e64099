pub mod health;
pub mod visits;

pub use health::{CheckHealthUseCase, HealthReport};
pub use visits::{
    BatchOutcome, BatchRecordVisitsUseCase, GetLatestVisitUseCase, GetVisitHistoryUseCase,
    GetVisitMetricsUseCase, RecordVisitUseCase, RejectedItem,
};
