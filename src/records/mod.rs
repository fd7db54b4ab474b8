//! Lookup table records and their delimited-file loader.
//!
//! # Data Flow
//! ```text
//! goods file (code;article;groupCode;isGroup;name;price)
//!     → loader.rs (skip header, parse rows, last code wins)
//!     → Catalog (code → CatalogItem)
//!
//! sellers / plumbers files (code;name)
//!     → loader.rs (skip header, parse rows, sort by name)
//!     → Vec<StaffMember>
//! ```
//!
//! # Design Decisions
//! - A file that cannot be read, or a row that is too short, fails the whole load
//! - A price that does not parse is recorded as zero and the row is kept

pub mod loader;
pub mod types;

pub use loader::{load_catalog, load_roster, parse_price, LoadError};
pub use types::{Catalog, CatalogItem, StaffMember};
