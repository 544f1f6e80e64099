use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::{
    dto::{HealthResponse, RootResponse},
    response::{ok, ApiResponse, Envelope},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

async fn root() -> Envelope<RootResponse> {
    ok(
        "API is running",
        RootResponse {
            message: "History Sidepanel API",
        },
    )
}

async fn health_check(State(state): State<AppState>) -> Envelope<HealthResponse> {
    let report = state.check_health.execute().await;
    let healthy = report.healthy;
    let body = HealthResponse::from(report);

    if healthy {
        ok("Service is healthy", body)
    } else {
        let mut response = ApiResponse::ok("Service unhealthy", body);
        response.success = false;
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}
