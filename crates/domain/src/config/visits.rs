use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// What a batch does when some of its items fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Any invalid item rejects the whole batch; nothing is written.
    #[default]
    RejectAll,
    /// Valid items are written in one transaction; invalid ones are reported back.
    AcceptValid,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VisitsConfig {
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    #[serde(default)]
    pub batch_policy: BatchPolicy,

    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for VisitsConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            batch_policy: BatchPolicy::default(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_max_batch_size() -> usize {
    500
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    MAX_PAGE_SIZE
}
