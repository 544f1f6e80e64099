use pagevisits_application::use_cases::visits::{BatchRecordVisitsUseCase, GetVisitMetricsUseCase};
use pagevisits_domain::config::BatchPolicy;
use pagevisits_domain::{DomainError, VisitSubmission};
use std::sync::Arc;

mod helpers;
use helpers::{submission, MockVisitStore};

fn batch_use_case(store: &Arc<MockVisitStore>, policy: BatchPolicy) -> BatchRecordVisitsUseCase {
    BatchRecordVisitsUseCase::new(store.clone(), policy, 500)
}

fn mixed_batch() -> Vec<VisitSubmission> {
    vec![
        submission("https://new.example.com/page"),
        VisitSubmission {
            link_count: Some(-5),
            ..submission("https://new.example.com/page")
        },
        submission("https://new.example.com/page/"),
    ]
}

#[tokio::test]
async fn test_batch_same_new_url_creates_one_entity() {
    let store = Arc::new(MockVisitStore::new());
    let batch = batch_use_case(&store, BatchPolicy::RejectAll);
    let metrics = GetVisitMetricsUseCase::new(store.clone(), store.clone());

    let outcome = batch
        .execute(vec![
            submission("https://new.example.com"),
            submission("https://new.example.com/"),
        ])
        .await
        .unwrap();

    assert_eq!(outcome.created_count, 2);
    assert!(outcome.rejected.is_empty());
    assert_eq!(store.url_count().await, 1);
    assert_eq!(store.visit_count().await, 2);

    let m = metrics.execute("https://new.example.com").await.unwrap();
    assert_eq!(m.total_visits, 2);
}

#[tokio::test]
async fn test_batch_reject_all_writes_nothing_on_invalid_item() {
    let store = Arc::new(MockVisitStore::new());
    let batch = batch_use_case(&store, BatchPolicy::RejectAll);

    let err = batch.execute(mixed_batch()).await.unwrap_err();

    match err {
        DomainError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.has("visits[1].link_count", "negative"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.url_count().await, 0);
    assert_eq!(store.visit_count().await, 0);
    assert_eq!(store.batch_calls().await, 0);
}

#[tokio::test]
async fn test_batch_reject_all_collects_violations_from_every_item() {
    let store = Arc::new(MockVisitStore::new());
    let batch = batch_use_case(&store, BatchPolicy::RejectAll);

    let err = batch
        .execute(vec![
            submission(""),
            submission("https://ok.example.com"),
            VisitSubmission {
                image_count: Some(100_001),
                ..submission("mailto:someone@example.com")
            },
        ])
        .await
        .unwrap_err();

    let violations = err.violations();
    assert!(violations.iter().any(|v| v.field == "visits[0].url" && v.code == "url_empty"));
    assert!(violations.iter().any(|v| v.field == "visits[2].url"));
    assert!(violations
        .iter()
        .any(|v| v.field == "visits[2].image_count" && v.code == "too_large"));
    assert!(!violations.iter().any(|v| v.field.starts_with("visits[1]")));
}

#[tokio::test]
async fn test_batch_accept_valid_writes_valid_items_and_reports_rest() {
    let store = Arc::new(MockVisitStore::new());
    let batch = batch_use_case(&store, BatchPolicy::AcceptValid);

    let outcome = batch.execute(mixed_batch()).await.unwrap();

    assert_eq!(outcome.created_count, 2);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].index, 1);
    assert!(outcome.rejected[0].errors.has("link_count", "negative"));
    assert_eq!(store.url_count().await, 1);
    assert_eq!(store.visit_count().await, 2);
}

#[tokio::test]
async fn test_batch_accept_valid_all_invalid_skips_store() {
    let store = Arc::new(MockVisitStore::new());
    let batch = batch_use_case(&store, BatchPolicy::AcceptValid);

    let outcome = batch
        .execute(vec![submission("nope"), submission("")])
        .await
        .unwrap();

    assert_eq!(outcome.created_count, 0);
    assert_eq!(outcome.rejected.len(), 2);
    assert_eq!(store.batch_calls().await, 0);
}

#[tokio::test]
async fn test_empty_batch_creates_nothing() {
    let store = Arc::new(MockVisitStore::new());
    let batch = batch_use_case(&store, BatchPolicy::RejectAll);

    let outcome = batch.execute(Vec::new()).await.unwrap();

    assert_eq!(outcome.created_count, 0);
    assert!(outcome.rejected.is_empty());
    assert_eq!(store.batch_calls().await, 0);
}

#[tokio::test]
async fn test_batch_over_limit_is_rejected() {
    let store = Arc::new(MockVisitStore::new());
    let batch = BatchRecordVisitsUseCase::new(store.clone(), BatchPolicy::AcceptValid, 2);

    let err = batch
        .execute(vec![
            submission("https://a.example.com"),
            submission("https://b.example.com"),
            submission("https://c.example.com"),
        ])
        .await
        .unwrap_err();

    assert!(err
        .violations()
        .iter()
        .any(|v| v.field == "visits" && v.code == "batch_too_large"));
    assert_eq!(store.visit_count().await, 0);
}

#[tokio::test]
async fn test_batch_propagates_storage_error() {
    let store = Arc::new(MockVisitStore::new());
    store.set_should_fail(true).await;
    let batch = batch_use_case(&store, BatchPolicy::RejectAll);

    let result = batch.execute(vec![submission("https://a.example.com")]).await;

    assert!(matches!(result, Err(DomainError::Storage(_))));
}
