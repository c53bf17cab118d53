//! Repository error taxonomy
//!
//! Every failure a command can report to the user has a variant here. Library
//! functions return `anyhow::Result` and raise these through `anyhow`, so callers
//! that care about the kind of failure recover it with `downcast_ref`.

use crate::artifacts::checkout::conflict::{ConflictMessage, ConflictsSet};
use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not a lgit repository (or any of the parent directories): {}", .0.display())]
    NotARepository(PathBuf),

    #[error("lgit repository already initialized in {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("pathspec '{0}' did not match any files")]
    PathNotFound(String),

    #[error("not removing '{0}' recursively")]
    NotRecursive(String),

    #[error("no author configured, run `lgit config --author <name>` first")]
    NoAuthor,

    #[error("please enter a commit message with -m")]
    MissingMessage,

    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),

    #[error("pathspec '{0}' did not match any branch known to lgit")]
    UnknownBranch(String),

    #[error("a branch named '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("not a valid object name: '{0}' has no commits yet")]
    NoCommits(String),

    #[error("{}", render_conflicts(.0))]
    DirtyCheckout(ConflictsSet),

    #[error("object {0} not found in the object store")]
    ObjectNotFound(ObjectId),

    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),

    #[error("corrupt {file} record at line {line}: {reason}")]
    CorruptRecord {
        file: String,
        line: usize,
        reason: String,
    },
}

fn render_conflicts(conflicts: &ConflictsSet) -> String {
    let mut lines = Vec::new();

    for (conflict_type, paths) in conflicts.iter().filter(|(_, paths)| !paths.is_empty()) {
        let message = ConflictMessage::from(conflict_type);

        lines.push(message.header.to_string());
        lines.extend(paths.iter().map(|path| format!("\t{}", path.display())));
        lines.push(message.footer.to_string());
    }
    lines.push(String::from("Aborting"));

    lines.join("\n")
}
