use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::errors::ValidationErrors;

pub const MAX_URL_LENGTH: usize = 2083;

/// Dedup key form of a URL: surrounding whitespace trimmed, `#fragment` cut,
/// trailing slashes dropped. Query string and casing are left alone.
///
/// Idempotent: `canonicalize(&canonicalize(u)) == canonicalize(u)`.
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_fragment = match trimmed.find('#') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };
    without_fragment
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

/// A URL that has been through [`canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalUrl(Arc<str>);

impl CanonicalUrl {
    /// Canonicalizes and checks that the result is an absolute http(s) URL
    /// with a host. Used for everything that gets stored.
    pub fn parse(raw: &str) -> Result<Self, ValidationErrors> {
        let canonical = canonicalize(raw);
        let mut errors = ValidationErrors::new();

        if canonical.is_empty() {
            errors.push("url", "url_empty", "URL cannot be empty");
            return Err(errors);
        }
        if canonical.chars().count() > MAX_URL_LENGTH {
            errors.push(
                "url",
                "too_long",
                format!("URL cannot exceed {} characters", MAX_URL_LENGTH),
            );
        }

        match url::Url::parse(&canonical) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    errors.push(
                        "url",
                        "url_scheme",
                        format!("URL scheme must be http or https, got '{}'", parsed.scheme()),
                    );
                }
                if parsed.host_str().map_or(true, str::is_empty) {
                    errors.push("url", "url_missing_host", "URL must include a host");
                }
            }
            Err(e) => {
                errors.push("url", "url_invalid", format!("Invalid URL: {}", e));
            }
        }

        errors.into_result(Self(Arc::from(canonical)))
    }

    /// Canonicalizes a URL used only as a read key. Anything non-empty is
    /// accepted; a URL that was never stored simply has no visits.
    pub fn for_lookup(raw: &str) -> Result<Self, ValidationErrors> {
        let canonical = canonicalize(raw);
        if canonical.is_empty() {
            return Err(ValidationErrors::single(
                "url",
                "url_empty",
                "URL cannot be empty",
            ));
        }
        Ok(Self(Arc::from(canonical)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_arc(&self) -> Arc<str> {
        self.0.clone()
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Registry entry: one row per distinct canonical URL, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageUrl {
    pub id: i64,
    pub url: Arc<str>,
    pub created_at: DateTime<Utc>,
}
