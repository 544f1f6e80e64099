use serde::{Deserialize, Serialize};

/// Per-client request quotas, in requests per minute.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_per_minute")]
    pub default_per_minute: u32,

    #[serde(default = "default_record_per_minute")]
    pub record_per_minute: u32,

    #[serde(default = "default_batch_per_minute")]
    pub batch_per_minute: u32,

    #[serde(default = "default_read_per_minute")]
    pub read_per_minute: u32,

    /// Key clients on the first `X-Forwarded-For` hop instead of the socket
    /// peer. Only enable behind a proxy that overwrites the header.
    #[serde(default)]
    pub trust_forwarded_for: bool,

    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_per_minute: default_per_minute(),
            record_per_minute: default_record_per_minute(),
            batch_per_minute: default_batch_per_minute(),
            read_per_minute: default_read_per_minute(),
            trust_forwarded_for: false,
            prune_interval_secs: default_prune_interval_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_per_minute() -> u32 {
    100
}

fn default_record_per_minute() -> u32 {
    30
}

fn default_batch_per_minute() -> u32 {
    10
}

fn default_read_per_minute() -> u32 {
    60
}

fn default_prune_interval_secs() -> u64 {
    60
}
