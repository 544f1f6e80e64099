//! Page Visits Domain Layer
pub mod config;
pub mod errors;
pub mod page_url;
pub mod pagination;
pub mod sanitize;
pub mod validation;
pub mod visit;

pub use config::{CliOverrides, Config};
pub use errors::{DomainError, FieldViolation, ValidationErrors};
pub use page_url::{canonicalize, CanonicalUrl, PageUrl};
pub use pagination::{HistoryPage, PageRequest};
pub use sanitize::sanitize_text;
pub use visit::{NewVisit, PageCounts, Visit, VisitMetrics, VisitSubmission};
