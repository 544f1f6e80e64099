use axum::{middleware::from_fn, middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

use crate::{errors::ApiError, handlers, middleware, state::AppState};

pub fn create_app(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .nest("/api/v1", handlers::visits::routes())
        .fallback(|| async { ApiError::NotFound })
        .layer(from_fn_with_state(state.clone(), middleware::rate_limit))
        .layer(from_fn(middleware::security_headers))
        .layer(middleware::cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
