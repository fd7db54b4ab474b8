//! HTTP front: routing, handlers and middleware.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (axum router, request id, tracing)
//!     → handlers.rs
//!         /api/product/{code}, /sellers, /plumbers → LookupStore
//!         /api/rukovoditel                          → ManagerClient
//!         /, unmatched paths                        → HTML page
//!     → /static/* → ServeDir
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{RequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
