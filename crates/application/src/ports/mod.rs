mod store_health;
mod url_registry;
mod visit_store;

pub use store_health::StoreHealthPort;
pub use url_registry::UrlRegistry;
pub use visit_store::VisitStore;
