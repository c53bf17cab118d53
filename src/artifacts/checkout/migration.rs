//! Reset-to-snapshot migration
//!
//! Used by checkout (after the conflict gate) and by stash (unconditionally).
//! The migration runs in three steps:
//!
//! 1. Remove every tracked working-tree file, pruning parent directories left
//!    empty. Pruning is best effort: a directory that cannot be removed is logged
//!    and skipped.
//! 2. Write every `(hash, path)` pair of the target snapshot, recreating parent
//!    directories as needed.
//! 3. Rebuild the index with fresh mtimes and all three hashes equal to the
//!    snapshot hash.
//!
//! Every object the target snapshot references is checked for existence before
//! step 1, so a missing object aborts with `ObjectNotFound` and leaves the
//! working tree untouched.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::{ConflictType, ConflictsSet};
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::RepositoryError;
use std::path::{Path, PathBuf};

pub struct Migration<'r> {
    repository: &'r Repository,
    index: &'r mut Index,
    target: Snapshot,
    conflicts: ConflictsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, index: &'r mut Index, target: Snapshot) -> Self {
        Self {
            repository,
            index,
            target,
            conflicts: ConflictsSet::new(),
        }
    }

    pub fn conflicts(&self) -> &ConflictsSet {
        &self.conflicts
    }

    /// Fail with `DirtyCheckout` if switching would lose uncommitted work
    ///
    /// Uncommitted work covers changed records, tracked files deleted from the
    /// working tree, and paths of the current commit removed from the index.
    /// The index must be refreshed beforehand so working hashes are current.
    pub fn check_conflicts(&mut self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();
        let mut stale_files = self
            .index
            .entries()
            .filter(|entry| entry.is_dirty() || !workspace.is_file(&entry.path))
            .map(|entry| entry.path.clone())
            .collect::<Vec<_>>();

        if let Some(head) = self.repository.refs().read_head()? {
            let head_snapshot = self.repository.history().load_snapshot(&head)?;
            stale_files.extend(self.index.removed_since(&head_snapshot).map(Path::to_path_buf));
        }
        stale_files.sort();
        stale_files.dedup();

        let mut untracked = Vec::new();
        for entry in self.target.entries() {
            if let Some(path) = self.untracked_obstruction(&entry.path)
                && !untracked.contains(&path)
            {
                untracked.push(path);
            }
        }
        untracked.sort();

        for (conflict_type, paths) in [
            (ConflictType::StaleFile, stale_files),
            (ConflictType::UntrackedOverwritten, untracked),
        ] {
            if !paths.is_empty() {
                self.conflicts.insert(conflict_type, paths);
            }
        }

        if self.conflicts.is_empty() {
            Ok(())
        } else {
            Err(RepositoryError::DirtyCheckout(self.conflicts.clone()).into())
        }
    }

    /// The path itself, or one of its parents, exists in the working tree
    /// without being tracked, so materializing `path` would clobber it
    fn untracked_obstruction(&self, path: &Path) -> Option<PathBuf> {
        let workspace = self.repository.workspace();

        if workspace.exists(path) && !self.index.is_tracked(path) {
            if workspace.is_dir(path) && self.index.is_tracked_dir(path) {
                return None;
            }
            return Some(path.to_path_buf());
        }

        path.ancestors()
            .skip(1)
            .filter(|parent| !parent.as_os_str().is_empty())
            .find(|parent| workspace.is_file(parent) && !self.index.is_tracked(parent))
            .map(Path::to_path_buf)
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.verify_objects()?;
        self.remove_tracked_files()?;
        self.materialize_snapshot()?;

        log::info!(
            "materialized {} snapshot entries into {}",
            self.target.len(),
            self.repository.path().display()
        );

        Ok(())
    }

    fn verify_objects(&self) -> anyhow::Result<()> {
        let database = self.repository.database();

        match self.target.entries().find(|entry| !database.contains(&entry.oid)) {
            Some(missing) => Err(RepositoryError::ObjectNotFound(missing.oid.clone()).into()),
            None => Ok(()),
        }
    }

    fn remove_tracked_files(&mut self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();
        let tracked = self
            .index
            .entries()
            .map(|entry| entry.path.clone())
            .collect::<Vec<_>>();

        for path in tracked.iter() {
            workspace.remove_file(path)?;
            workspace.prune_empty_parents(path);
        }
        self.index.clear();

        Ok(())
    }

    fn materialize_snapshot(&mut self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();
        let database = self.repository.database();

        for entry in self.target.entries() {
            let content = database.load(&entry.oid)?;
            workspace.write_file(&entry.path, &content)?;

            let mtime = workspace.stat_mtime(&entry.path)?;
            self.index.add(IndexEntry::new_committed(
                entry.path.clone(),
                mtime,
                entry.oid.clone(),
            ));
        }

        Ok(())
    }
}
