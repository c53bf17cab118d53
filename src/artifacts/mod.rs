//! Repository records and algorithms
//!
//! - `branch`: Branch name validation
//! - `checkout`: Conflict detection and the reset-to-snapshot migration
//! - `core`: Shared utilities (clock, pager wrapper)
//! - `index`: Index record format
//! - `objects`: Object ids, blobs, commit records and snapshots
//! - `stash`: Stash log records
//! - `status`: Working tree status classification

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod objects;
pub mod stash;
pub mod status;
