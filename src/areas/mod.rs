//! Core repository components
//!
//! This module contains the persistent building blocks of a repository, all
//! rooted in the `.lgit` control directory:
//!
//! - `config`: Commit author value
//! - `database`: Content-addressed object store
//! - `history`: Commit records, snapshots and id generation
//! - `index`: Per-path tracking records (the staging area)
//! - `lock`: Repository-wide advisory lock for mutating commands
//! - `refs`: Branch refs and HEAD
//! - `repository`: High-level repository operations and coordination
//! - `stashes`: Stash log
//! - `workspace`: Working tree file system operations

pub(crate) mod config;
pub(crate) mod database;
pub(crate) mod history;
pub mod index;
pub mod lock;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod stashes;
pub(crate) mod workspace;

/// Name of the control directory at the repository root
pub const CONTROL_DIR: &str = ".lgit";
