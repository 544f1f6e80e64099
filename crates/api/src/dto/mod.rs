pub mod health;
pub mod visit;

pub use health::{HealthResponse, RootResponse};
pub use visit::{
    BatchCreateRequest, BatchCreateResponse, HistoryQuery, HistoryResponse, MetricsResponse,
    RejectedVisitResponse, UrlQuery, VisitCreateRequest, VisitResponse,
};
