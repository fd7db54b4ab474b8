//! Point-of-sale lookup service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod manager;
pub mod net;
pub mod observability;
pub mod records;
pub mod store;

pub use config::schema::KassaConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::LookupStore;
