//! Checkout operations and conflict handling
//!
//! Switching branches (and shelving work with stash) resets the working tree to
//! a snapshot. This module:
//! - Detects conflicts with uncommitted work before touching anything
//! - Removes every tracked file and prunes the directories left empty
//! - Materializes the target snapshot and rebuilds the index from it

pub mod conflict;
pub mod migration;
