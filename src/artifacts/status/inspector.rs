use crate::areas::index::Index;
use crate::areas::repository::Repository;
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Whether `path` is, or contains somewhere below it, a file with no index record
    ///
    /// Empty directories (or trees of empty directories) hold nothing to track.
    pub fn holds_untracked_files(&self, path: &Path, index: &Index) -> anyhow::Result<bool> {
        let workspace = self.repository.workspace();

        if !workspace.is_dir(path) {
            return Ok(!index.is_tracked(path));
        }

        for child in workspace.list_dir(Some(path))? {
            if self.holds_untracked_files(&child, index)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
