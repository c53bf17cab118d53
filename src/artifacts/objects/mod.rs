//! Stored record types
//!
//! - **Blob**: raw file content, addressed by the SHA-1 of its exact bytes
//! - **Commit**: author, timestamp and message of a history entry
//! - **Snapshot**: the `(hash, path)` listing materialized by a commit or a stash
//!
//! Blobs live in the object store under `objects/<2>/<38>`; commits and snapshots
//! are text files named by their timestamp id (`CommitId`).

pub mod blob;
pub mod commit;
pub mod commit_id;
pub mod object;
pub mod object_id;
pub mod snapshot;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
