use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use pagevisits_domain::config::BatchPolicy;
use tracing::debug;

use crate::{
    dto::{
        BatchCreateRequest, BatchCreateResponse, HistoryQuery, HistoryResponse, MetricsResponse,
        UrlQuery, VisitCreateRequest, VisitResponse,
    },
    errors::ApiError,
    extract::{AppJson, AppQuery},
    response::{created, ok, Envelope},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/visits", post(create_visit))
        .route("/visits/batch", post(create_visits_batch))
        .route("/visits/history", get(get_history))
        .route("/visits/metrics", get(get_metrics))
        .route("/visits/latest", get(get_latest))
}

async fn create_visit(
    State(state): State<AppState>,
    AppJson(req): AppJson<VisitCreateRequest>,
) -> Result<Envelope<VisitResponse>, ApiError> {
    let visit = state.visits.record.execute(req.into_submission()).await?;
    Ok(created(
        "Visit created successfully",
        VisitResponse::from_visit(visit),
    ))
}

async fn create_visits_batch(
    State(state): State<AppState>,
    AppJson(req): AppJson<BatchCreateRequest>,
) -> Result<Envelope<BatchCreateResponse>, ApiError> {
    let submissions = req
        .visits
        .into_iter()
        .map(VisitCreateRequest::into_submission)
        .collect();

    let batch = &state.visits.batch_record;
    let outcome = batch.execute(submissions).await?;
    let report_rejected = batch.policy() == BatchPolicy::AcceptValid;

    Ok(created(
        "Visits created successfully",
        BatchCreateResponse::from_outcome(outcome, report_rejected),
    ))
}

async fn get_history(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<HistoryQuery>,
) -> Result<Envelope<HistoryResponse>, ApiError> {
    let page_size = params.page_size.unwrap_or(state.default_page_size);
    let page = state
        .visits
        .get_history
        .execute(&params.url, params.page, page_size)
        .await?;
    debug!(
        returned = page.items.len(),
        total = page.total,
        "History retrieved"
    );
    Ok(ok(
        "History retrieved successfully",
        HistoryResponse::from_page(page),
    ))
}

async fn get_metrics(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UrlQuery>,
) -> Result<Envelope<MetricsResponse>, ApiError> {
    let metrics = state.visits.get_metrics.execute(&params.url).await?;
    Ok(ok(
        "Metrics retrieved successfully",
        MetricsResponse::from(metrics),
    ))
}

async fn get_latest(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UrlQuery>,
) -> Result<Envelope<Option<VisitResponse>>, ApiError> {
    let latest = state.visits.get_latest.execute(&params.url).await?;
    let message = if latest.is_some() {
        "Latest visit retrieved successfully"
    } else {
        "No visits found for URL"
    };
    Ok(ok(message, latest.map(VisitResponse::from_visit)))
}
