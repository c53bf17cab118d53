//! Command implementations
//!
//! Every user-facing command is a `porcelain` module holding an
//! `impl Repository` block. Output goes to the repository writer; failures are
//! returned as `RepositoryError` values wrapped in `anyhow`.

pub mod porcelain;
