//! Stash log records
//!
//! The stash log (`.lgit/stashes`) is append-only, one record per line:
//!
//! ```text
//! <stash id> <branch> <short commit id> <commit message>
//! ```
//!
//! The stash id names the snapshot holding the shelved staged state. Branch
//! names never contain spaces, so the message is everything after the third space.

pub mod stash_entry;
