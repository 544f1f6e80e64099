use chrono::SecondsFormat;
use pagevisits_application::use_cases::{BatchOutcome, RejectedItem};
use pagevisits_domain::{HistoryPage, Visit, VisitMetrics, VisitSubmission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct VisitCreateRequest {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link_count: Option<i64>,
    #[serde(default)]
    pub word_count: Option<i64>,
    #[serde(default)]
    pub image_count: Option<i64>,
}

impl VisitCreateRequest {
    pub fn into_submission(self) -> VisitSubmission {
        VisitSubmission {
            url: self.url,
            title: self.title,
            description: self.description,
            link_count: self.link_count,
            word_count: self.word_count,
            image_count: self.image_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchCreateRequest {
    pub visits: Vec<VisitCreateRequest>,
}

#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime_visited: String,
    pub link_count: u32,
    pub word_count: u32,
    pub image_count: u32,
}

impl VisitResponse {
    pub fn from_visit(visit: Visit) -> Self {
        Self {
            id: visit.id,
            url: visit.url.to_string(),
            title: visit.title.as_deref().map(String::from),
            description: visit.description.as_deref().map(String::from),
            datetime_visited: visit
                .visited_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            link_count: visit.counts.link_count,
            word_count: visit.counts.word_count,
            image_count: visit.counts.image_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RejectedVisitResponse {
    pub index: usize,
    pub errors: Vec<String>,
    pub error_codes: Vec<String>,
}

impl RejectedVisitResponse {
    fn from_item(item: RejectedItem) -> Self {
        Self {
            index: item.index,
            errors: item.errors.violations().iter().map(|v| v.to_string()).collect(),
            error_codes: item.errors.codes().into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchCreateResponse {
    pub created_count: u64,
    /// Present only when the server accepts partially valid batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Vec<RejectedVisitResponse>>,
}

impl BatchCreateResponse {
    pub fn from_outcome(outcome: BatchOutcome, report_rejected: bool) -> Self {
        Self {
            created_count: outcome.created_count,
            rejected: report_rejected.then(|| {
                outcome
                    .rejected
                    .into_iter()
                    .map(RejectedVisitResponse::from_item)
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub url: String,
    #[serde(default = "default_page")]
    pub page: u32,
    pub page_size: Option<u32>,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<VisitResponse>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

impl HistoryResponse {
    pub fn from_page(page: HistoryPage) -> Self {
        Self {
            items: page.items.into_iter().map(VisitResponse::from_visit).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            has_more: page.has_more,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub total_visits: u64,
}

impl From<VisitMetrics> for MetricsResponse {
    fn from(metrics: VisitMetrics) -> Self {
        Self {
            total_visits: metrics.total_visits,
        }
    }
}
