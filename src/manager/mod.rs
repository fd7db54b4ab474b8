//! Management API (Rukovoditel) integration.
//!
//! # Data Flow
//! ```text
//! GET /api/rukovoditel
//!     → client.rs (fixed POST with configured credentials, 10s timeout)
//!     → decode JSON object
//!     → relayed to the caller unchanged
//! ```
//!
//! # Design Decisions
//! - No caching: every call goes to the network
//! - No retries: a failure is reported to the caller as-is
//! - Upstream status codes are not interpreted; only the body matters

pub mod client;

pub use client::{ManagerClient, ManagerError, ManagerRequest};
