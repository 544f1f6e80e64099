#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pagevisits_api::{create_app, middleware::RateLimiters, AppState, VisitHandlers};
use pagevisits_application::use_cases::{
    BatchRecordVisitsUseCase, CheckHealthUseCase, GetLatestVisitUseCase, GetVisitHistoryUseCase,
    GetVisitMetricsUseCase, RecordVisitUseCase,
};
use pagevisits_domain::config::{BatchPolicy, RateLimitConfig};
use pagevisits_infrastructure::database::{run_migrations, SqliteStoreHealth};
use pagevisits_infrastructure::repositories::{SqliteUrlRegistry, SqliteVisitRepository};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

pub struct TestOptions {
    pub batch_policy: BatchPolicy,
    pub max_batch_size: usize,
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            batch_policy: BatchPolicy::RejectAll,
            max_batch_size: 500,
            rate_limit: None,
        }
    }
}

pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(TestOptions::default()).await
}

pub async fn create_test_app_with(options: TestOptions) -> TestApp {
    let pool = create_test_db().await;

    let registry = Arc::new(SqliteUrlRegistry::new(pool.clone(), pool.clone()));
    let store = Arc::new(SqliteVisitRepository::new(pool.clone(), pool.clone()));
    let health = Arc::new(SqliteStoreHealth::new(pool.clone()));

    let state = AppState {
        visits: VisitHandlers {
            record: Arc::new(RecordVisitUseCase::new(registry.clone(), store.clone())),
            batch_record: Arc::new(BatchRecordVisitsUseCase::new(
                store.clone(),
                options.batch_policy,
                options.max_batch_size,
            )),
            get_history: Arc::new(GetVisitHistoryUseCase::new(
                registry.clone(),
                store.clone(),
                100,
            )),
            get_metrics: Arc::new(GetVisitMetricsUseCase::new(
                registry.clone(),
                store.clone(),
            )),
            get_latest: Arc::new(GetLatestVisitUseCase::new(registry, store)),
        },
        check_health: Arc::new(CheckHealthUseCase::new(health, "1.0.0-test")),
        rate_limiters: options
            .rate_limit
            .as_ref()
            .and_then(RateLimiters::from_config)
            .map(Arc::new),
        default_page_size: 10,
    };

    let origins = vec![
        "chrome-extension://*".to_string(),
        "http://localhost:3000".to_string(),
    ];

    TestApp {
        app: create_app(state, &origins),
        pool,
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub fn encode(url: &str) -> String {
    url.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
