use axum::{
    extract::{ConnectInfo, Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use pagevisits_domain::config::RateLimitConfig;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{errors::ApiError, state::AppState};

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Record,
    Batch,
    Read,
    Default,
}

impl RouteClass {
    pub fn of(method: &Method, path: &str) -> Self {
        match (method, path.trim_end_matches('/')) {
            (&Method::POST, "/api/v1/visits") => RouteClass::Record,
            (&Method::POST, "/api/v1/visits/batch") => RouteClass::Batch,
            (&Method::GET, p) if p.starts_with("/api/v1/visits/") => RouteClass::Read,
            _ => RouteClass::Default,
        }
    }
}

/// One keyed limiter per route class, each keyed by client address.
pub struct RateLimiters {
    record: KeyedLimiter,
    batch: KeyedLimiter,
    read: KeyedLimiter,
    default: KeyedLimiter,
    trust_forwarded_for: bool,
}

fn per_minute(n: u32) -> Quota {
    Quota::per_minute(NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN))
}

impl RateLimiters {
    pub fn from_config(cfg: &RateLimitConfig) -> Option<Self> {
        if !cfg.enabled {
            return None;
        }
        Some(Self {
            record: RateLimiter::keyed(per_minute(cfg.record_per_minute)),
            batch: RateLimiter::keyed(per_minute(cfg.batch_per_minute)),
            read: RateLimiter::keyed(per_minute(cfg.read_per_minute)),
            default: RateLimiter::keyed(per_minute(cfg.default_per_minute)),
            trust_forwarded_for: cfg.trust_forwarded_for,
        })
    }

    fn all(&self) -> [&KeyedLimiter; 4] {
        [&self.record, &self.batch, &self.read, &self.default]
    }

    pub fn check(&self, class: RouteClass, client: &str) -> bool {
        let limiter = match class {
            RouteClass::Record => &self.record,
            RouteClass::Batch => &self.batch,
            RouteClass::Read => &self.read,
            RouteClass::Default => &self.default,
        };
        limiter.check_key(&client.to_string()).is_ok()
    }

    /// Client address for `request`. The forwarded header is ignored unless
    /// the deployment trusts its proxy.
    pub fn client_key(&self, request: &Request) -> String {
        if self.trust_forwarded_for {
            if let Some(forwarded) = request
                .headers()
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty())
            {
                return forwarded.to_string();
            }
        }
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Drops clients whose quota has fully replenished.
    pub fn prune(&self) {
        for limiter in self.all() {
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    }

    pub fn tracked_clients(&self) -> usize {
        self.all().iter().map(|limiter| limiter.len()).sum()
    }

    /// Prunes idle client entries every `period` until the runtime shuts down.
    pub fn spawn_pruning(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.prune();
                debug!(tracked_clients = self.tracked_clients(), "Pruned rate limiter state");
            }
        })
    }
}

pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(limiters) = &state.rate_limiters {
        let class = RouteClass::of(request.method(), request.uri().path());
        let client = limiters.client_key(&request);
        if !limiters.check(class, &client) {
            warn!(
                path = %request.uri().path(),
                client = %client,
                ?class,
                "Rate limit exceeded"
            );
            return ApiError::RateLimited.into_response();
        }
    }
    next.run(request).await
}
