//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (--https)
//!     → KassaConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults that reproduce the fixed file layout
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DataConfig;
pub use schema::KassaConfig;
pub use schema::ListenerConfig;
pub use schema::ManagerConfig;
pub use schema::WebConfig;
