use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    /// SQLite has a single writer; more than one write connection only adds
    /// busy waiting.
    #[serde(default = "default_write_pool_max_connections")]
    pub write_pool_max_connections: u32,

    #[serde(default = "default_read_pool_max_connections")]
    pub read_pool_max_connections: u32,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            write_pool_max_connections: default_write_pool_max_connections(),
            read_pool_max_connections: default_read_pool_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

fn default_db_path() -> String {
    "./pagevisits.db".to_string()
}

fn default_write_pool_max_connections() -> u32 {
    1
}

fn default_read_pool_max_connections() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    5
}
