//! Working tree status inspection
//!
//! Status is derived from the three hashes each index record carries, plus a
//! scan of the working tree for paths with no record.
//!
//! ## Components
//!
//! - `file_change`: Enum types for categorizing changes
//! - `inspector`: Working tree checks used by the scan
//! - `status_info`: Status classification and aggregation

pub mod file_change;
pub mod inspector;
pub mod status_info;
