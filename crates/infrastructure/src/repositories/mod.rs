mod timestamps;
pub mod url_registry;
pub mod visit_repository;

pub use url_registry::SqliteUrlRegistry;
pub use visit_repository::SqliteVisitRepository;
