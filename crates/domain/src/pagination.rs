use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;
use crate::visit::Visit;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A 1-based page request. `page_size` is capped by the caller-facing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32, max_page_size: u32) -> Result<Self, ValidationErrors> {
        let max_page_size = max_page_size.clamp(1, MAX_PAGE_SIZE);
        let mut errors = ValidationErrors::new();
        if page < 1 {
            errors.push(
                "page",
                "page_out_of_range",
                "page must be greater than or equal to 1",
            );
        }
        if page_size < 1 || page_size > max_page_size {
            errors.push(
                "page_size",
                "page_size_out_of_range",
                format!("page_size must be between 1 and {}", max_page_size),
            );
        }
        errors.into_result(Self { page, page_size })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Whether rows exist past the end of this page.
    pub fn has_more(&self, total: u64) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < total
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub items: Vec<Visit>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
}

impl HistoryPage {
    pub fn new(items: Vec<Visit>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
            has_more: request.has_more(total),
        }
    }
}
