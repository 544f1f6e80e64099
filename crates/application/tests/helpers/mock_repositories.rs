#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use pagevisits_application::ports::{StoreHealthPort, UrlRegistry, VisitStore};
use pagevisits_domain::{
    CanonicalUrl, DomainError, NewVisit, PageRequest, PageUrl, Visit, VisitMetrics,
    VisitSubmission,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ── MockVisitStore ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct StoreState {
    urls: Vec<PageUrl>,
    visits: Vec<Visit>,
    batch_calls: usize,
}

/// In-memory registry and visit log. Timestamps come from a fake clock that
/// advances one second per insert, unless the visit carries its own.
#[derive(Clone)]
pub struct MockVisitStore {
    state: Arc<RwLock<StoreState>>,
    should_fail: Arc<RwLock<bool>>,
    clock: Arc<RwLock<DateTime<Utc>>>,
    visit_reads: Arc<AtomicUsize>,
}

impl MockVisitStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            should_fail: Arc::new(RwLock::new(false)),
            clock: Arc::new(RwLock::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())),
            visit_reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn url_count(&self) -> usize {
        self.state.read().await.urls.len()
    }

    pub async fn visit_count(&self) -> usize {
        self.state.read().await.visits.len()
    }

    pub async fn batch_calls(&self) -> usize {
        self.state.read().await.batch_calls
    }

    /// Number of history, latest and metrics reads that reached the visit log.
    pub fn visit_reads(&self) -> usize {
        self.visit_reads.load(Ordering::SeqCst)
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::Storage("mock storage failure".to_string()));
        }
        Ok(())
    }

    async fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.write().await;
        *clock += Duration::seconds(1);
        *clock
    }

    fn resolve_in(state: &mut StoreState, url: &CanonicalUrl) -> i64 {
        if let Some(existing) = state.urls.iter().find(|u| u.url.as_ref() == url.as_str()) {
            return existing.id;
        }
        let id = state.urls.len() as i64 + 1;
        state.urls.push(PageUrl {
            id,
            url: url.as_arc(),
            created_at: Utc::now(),
        });
        id
    }

    fn append(state: &mut StoreState, url_id: i64, visit: &NewVisit, at: DateTime<Utc>) -> Visit {
        let stored = Visit {
            id: state.visits.len() as i64 + 1,
            url_id,
            url: visit.url.as_arc(),
            title: visit.title.clone(),
            description: visit.description.clone(),
            visited_at: visit.visited_at.unwrap_or(at),
            counts: visit.counts,
        };
        state.visits.push(stored.clone());
        stored
    }

    fn sorted_for(state: &StoreState, url: &CanonicalUrl) -> Vec<Visit> {
        let mut items: Vec<Visit> = state
            .visits
            .iter()
            .filter(|v| v.url.as_ref() == url.as_str())
            .cloned()
            .collect();
        items.sort_by(|a, b| b.visited_at.cmp(&a.visited_at).then(b.id.cmp(&a.id)));
        items
    }
}

impl Default for MockVisitStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRegistry for MockVisitStore {
    async fn resolve_or_create(&self, url: &CanonicalUrl) -> Result<i64, DomainError> {
        self.check_failure().await?;
        let mut state = self.state.write().await;
        Ok(Self::resolve_in(&mut state, url))
    }

    async fn find(&self, url: &CanonicalUrl) -> Result<Option<PageUrl>, DomainError> {
        self.check_failure().await?;
        let state = self.state.read().await;
        Ok(state.urls.iter().find(|u| u.url.as_ref() == url.as_str()).cloned())
    }
}

#[async_trait]
impl VisitStore for MockVisitStore {
    async fn insert_one(&self, url_id: i64, visit: &NewVisit) -> Result<Visit, DomainError> {
        self.check_failure().await?;
        let at = self.tick().await;
        let mut state = self.state.write().await;
        Ok(Self::append(&mut state, url_id, visit, at))
    }

    async fn insert_batch(&self, visits: &[NewVisit]) -> Result<u64, DomainError> {
        self.check_failure().await?;
        let at = self.tick().await;
        let mut state = self.state.write().await;
        state.batch_calls += 1;
        for visit in visits {
            let url_id = Self::resolve_in(&mut state, &visit.url);
            Self::append(&mut state, url_id, visit, at);
        }
        Ok(visits.len() as u64)
    }

    async fn query_by_url(
        &self,
        url: &CanonicalUrl,
        page: PageRequest,
    ) -> Result<(Vec<Visit>, u64), DomainError> {
        self.check_failure().await?;
        self.visit_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        let all = Self::sorted_for(&state, url);
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn latest_by_url(&self, url: &CanonicalUrl) -> Result<Option<Visit>, DomainError> {
        self.check_failure().await?;
        self.visit_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        Ok(Self::sorted_for(&state, url).into_iter().next())
    }

    async fn metrics_by_url(&self, url: &CanonicalUrl) -> Result<VisitMetrics, DomainError> {
        self.check_failure().await?;
        self.visit_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        let total_visits = state
            .visits
            .iter()
            .filter(|v| v.url.as_ref() == url.as_str())
            .count() as u64;
        Ok(VisitMetrics { total_visits })
    }
}

#[async_trait]
impl StoreHealthPort for MockVisitStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.check_failure().await
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────────

pub fn submission(url: &str) -> VisitSubmission {
    VisitSubmission::for_url(url)
}

pub fn titled(url: &str, title: &str) -> VisitSubmission {
    VisitSubmission {
        title: Some(title.to_string()),
        ..VisitSubmission::for_url(url)
    }
}
