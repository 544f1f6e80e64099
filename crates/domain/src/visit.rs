use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::page_url::CanonicalUrl;

pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_LINK_COUNT: i64 = 100_000;
pub const MAX_WORD_COUNT: i64 = 10_000_000;
pub const MAX_IMAGE_COUNT: i64 = 100_000;

/// Structural counts extracted from a page by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCounts {
    pub link_count: u32,
    pub word_count: u32,
    pub image_count: u32,
}

impl PageCounts {
    pub fn new(link_count: u32, word_count: u32, image_count: u32) -> Self {
        Self {
            link_count,
            word_count,
            image_count,
        }
    }
}

/// A visit exactly as submitted, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct VisitSubmission {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link_count: Option<i64>,
    pub word_count: Option<i64>,
    pub image_count: Option<i64>,
}

impl VisitSubmission {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// A normalized visit ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub url: CanonicalUrl,
    pub title: Option<Arc<str>>,
    pub description: Option<Arc<str>>,
    pub counts: PageCounts,
    /// `None` means "now", stamped by the store.
    pub visited_at: Option<DateTime<Utc>>,
}

impl NewVisit {
    pub fn new(url: CanonicalUrl) -> Self {
        Self {
            url,
            title: None,
            description: None,
            counts: PageCounts::default(),
            visited_at: None,
        }
    }

    pub fn with_visited_at(mut self, visited_at: DateTime<Utc>) -> Self {
        self.visited_at = Some(visited_at);
        self
    }

    pub fn with_counts(mut self, counts: PageCounts) -> Self {
        self.counts = counts;
        self
    }
}

/// A stored visit. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: i64,
    pub url_id: i64,
    pub url: Arc<str>,
    pub title: Option<Arc<str>>,
    pub description: Option<Arc<str>>,
    pub visited_at: DateTime<Utc>,
    pub counts: PageCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitMetrics {
    pub total_visits: u64,
}
