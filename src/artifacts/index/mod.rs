//! Index file format
//!
//! The index is a text table with one record per tracked path, kept in insertion
//! order. Each line holds exactly five tab-separated fields:
//!
//! ```text
//! <mtime>\t<working hash>\t<staged hash>\t<committed hash>\t<path>
//! ```
//!
//! - `mtime`: `%Y%m%d%H%M%S`, local time, second precision
//! - hashes: 40 hex characters; a path never committed carries `UNSET_HASH`
//! - `path`: repository-relative, `/`-separated; the last field, so it may hold spaces

pub mod index_entry;

/// Number of tab-separated fields in every index record
pub const FIELD_COUNT: usize = 5;

/// Separator between index record fields
pub const FIELD_SEPARATOR: char = '\t';

/// Modification time rendering used in index records
pub const MTIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Committed hash of a path that has never been committed
pub const UNSET_HASH: &str = "0000000000000000000000000000000000000000";
