//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! --https=false
//!     → listener.rs (bind plain TCP listener)
//!     → axum::serve
//!
//! --https (default)
//!     → tls.rs (load PEM certificate chain and key)
//!     → listener.rs (bind plain TCP listener)
//!     → axum_server::from_tcp_rustls
//! ```
//!
//! # Design Decisions
//! - Failing to load TLS material or to bind is fatal at startup
//! - No connection limits; each connection is handled by its own task

pub mod listener;
pub mod tls;
