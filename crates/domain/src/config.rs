pub mod database;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod server;
pub mod visits;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use visits::{BatchPolicy, VisitsConfig};
