//! lgit: a minimal local version-control engine
//!
//! - `areas`: the persistent parts of a repository (objects, index, refs, history, ...)
//! - `artifacts`: records and algorithms operating on those areas
//! - `commands`: user-facing operations, one per CLI command
//! - `errors`: the typed failure taxonomy surfaced to callers

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
