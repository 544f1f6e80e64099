mod cors;
mod rate_limit;
mod security_headers;

pub use cors::{cors_layer, origin_allowed};
pub use rate_limit::{rate_limit, RateLimiters, RouteClass};
pub use security_headers::security_headers;
