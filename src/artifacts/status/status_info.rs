use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::artifacts::status::file_change::{
    FileChange, FileChangeType, IndexChangeType, WorkspaceChangeType,
};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type ChangeSet = BTreeMap<PathBuf, FileChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

/// Status of the repository split into the three reported partitions
///
/// Untracked directories are stored with a trailing separator (`dir/`).
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub(crate) has_commits: bool,
    pub(crate) changed_files: BTreeMap<PathBuf, FileChange>,
    pub(crate) untracked_files: FileSet,
    pub(crate) index_changeset: ChangeSet,
    pub(crate) workspace_changeset: ChangeSet,
}

impl StatusInfo {
    /// Paths whose staged content differs from the last commit
    pub fn to_be_committed(&self) -> &ChangeSet {
        &self.index_changeset
    }

    /// Tracked paths whose working content differs from the staged content
    pub fn not_staged(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked_files
    }

    pub fn changed_files(&self) -> &BTreeMap<PathBuf, FileChange> {
        &self.changed_files
    }

    pub fn has_commits(&self) -> bool {
        self.has_commits
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Refresh the index from the working tree and classify every path
    pub async fn initialize(&self, index: &mut Index) -> anyhow::Result<StatusInfo> {
        index.refresh(self.repository.workspace())?;

        let mut untracked_files = BTreeSet::<PathBuf>::new();
        let inspector = Inspector::new(self.repository);
        self.scan_workspace(None, &mut untracked_files, index, &inspector)
            .await?;

        let head_snapshot = self.load_head_snapshot()?;
        let mut changed_files = BTreeMap::<PathBuf, FileChange>::new();
        for entry in index.entries() {
            self.check_index_entry(entry, &mut changed_files);
        }
        if let Some(head_snapshot) = head_snapshot.as_ref() {
            self.collect_deleted_head_files(head_snapshot, index, &mut changed_files);
        }

        let workspace_changeset = changed_files
            .iter()
            .filter(|(_, change)| change.workspace_change != WorkspaceChangeType::None)
            .map(|(file, change)| {
                (
                    file.clone(),
                    FileChangeType::Workspace(change.workspace_change.clone()),
                )
            })
            .collect::<BTreeMap<_, _>>();
        let index_changeset = changed_files
            .iter()
            .filter(|(_, change)| change.index_change != IndexChangeType::None)
            .map(|(file, change)| {
                (
                    file.clone(),
                    FileChangeType::Index(change.index_change.clone()),
                )
            })
            .collect::<BTreeMap<_, _>>();

        Ok(StatusInfo {
            has_commits: head_snapshot.is_some(),
            changed_files,
            untracked_files,
            index_changeset,
            workspace_changeset,
        })
    }

    async fn scan_workspace(
        &self,
        prefix_path: Option<&Path>,
        untracked_files: &mut BTreeSet<PathBuf>,
        index: &Index,
        inspector: &Inspector<'_>,
    ) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();
        let paths = workspace.list_dir(prefix_path)?;

        for path in paths.iter() {
            if index.is_tracked(path) {
                continue;
            }

            if workspace.is_dir(path) && index.is_tracked_dir(path) {
                Box::pin(self.scan_workspace(Some(path), untracked_files, index, inspector))
                    .await?;
            } else if inspector.holds_untracked_files(path, index)? {
                // add the file separator if it's a directory
                let path = if workspace.is_dir(path) {
                    let mut p = path.clone();
                    p.push("");
                    p
                } else {
                    path.clone()
                };
                untracked_files.insert(path);
            }
        }

        Ok(())
    }

    fn load_head_snapshot(&self) -> anyhow::Result<Option<Snapshot>> {
        match self.repository.refs().read_head()? {
            Some(head) => Ok(Some(self.repository.history().load_snapshot(&head)?)),
            None => Ok(None),
        }
    }

    fn check_index_entry(
        &self,
        entry: &IndexEntry,
        changed_files: &mut BTreeMap<PathBuf, FileChange>,
    ) {
        let workspace_change = if !self.repository.workspace().exists(&entry.path) {
            WorkspaceChangeType::Deleted
        } else if entry.has_workspace_changes() {
            WorkspaceChangeType::Modified
        } else {
            WorkspaceChangeType::None
        };

        let index_change = match &entry.committed_oid {
            _ if !entry.has_staged_changes() => IndexChangeType::None,
            None => IndexChangeType::Added,
            Some(_) => IndexChangeType::Modified,
        };

        if workspace_change != WorkspaceChangeType::None || index_change != IndexChangeType::None
        {
            changed_files.insert(
                entry.path.clone(),
                FileChange {
                    workspace_change,
                    index_change,
                },
            );
        }
    }

    /// Paths of the current commit with no index record were removed with `rm`
    fn collect_deleted_head_files(
        &self,
        head_snapshot: &Snapshot,
        index: &Index,
        changed_files: &mut BTreeMap<PathBuf, FileChange>,
    ) {
        for path in index.removed_since(head_snapshot) {
            changed_files.entry(path.to_path_buf()).or_default().index_change =
                IndexChangeType::Deleted;
        }
    }
}
