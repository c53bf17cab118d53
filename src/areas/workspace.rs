use crate::areas::CONTROL_DIR;
use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [CONTROL_DIR, ".", ".."];

/// Working tree rooted at the repository directory
///
/// Every path taken or returned is relative to the repository root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.path.join(path).exists()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.path.join(path).is_dir()
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.path.join(path).is_file()
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    /// Direct children of `dir_path` (the root when `None`), sorted by name
    pub fn list_dir(&self, dir_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let dir_path = match dir_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !dir_path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", dir_path);
        }

        let mut paths = std::fs::read_dir(&dir_path)
            .with_context(|| format!("Unable to list directory {:?}", dir_path))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_path(&entry.path()))
            .collect::<Vec<_>>();
        paths.sort();

        Ok(paths)
    }

    /// Files under `root_file_path` (the whole tree when `None`), recursively,
    /// directories excluded, sorted by path
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        if root_file_path.is_dir() {
            Ok(WalkDir::new(&root_file_path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| !Self::is_ignored_name(entry.file_name()))
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| self.check_if_not_ignored_path(entry.path()))
                .collect::<Vec<_>>())
        } else {
            Ok(self
                .check_if_not_ignored_path(&root_file_path)
                .into_iter()
                .collect())
        }
    }

    fn is_ignored_name(name: &std::ffi::OsStr) -> bool {
        IGNORED_PATHS.contains(&name.to_string_lossy().as_ref())
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                Self::is_ignored_name(name)
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_path(&self, path: &Path) -> Option<PathBuf> {
        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?;

        if relative_path.as_os_str().is_empty() || Self::is_ignored(relative_path) {
            None
        } else {
            Some(relative_path.to_path_buf())
        }
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Unable to read file {:?}", file_path))?;

        Ok(content.into())
    }

    /// Modification time in local time, truncated to seconds
    pub fn stat_mtime(&self, file_path: &Path) -> anyhow::Result<NaiveDateTime> {
        let metadata = std::fs::metadata(self.path.join(file_path))
            .with_context(|| format!("Unable to stat file {:?}", file_path))?;
        let mtime = DateTime::<Local>::from(metadata.modified()?).naive_local();

        Ok(mtime.with_nanosecond(0).unwrap_or(mtime))
    }

    /// Write `content` at `file_path`, creating missing parent directories
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create parent directories of {:?}", file_path))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Remove a file; one that is already gone is not an error
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        match std::fs::remove_file(self.path.join(file_path)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(e).with_context(|| format!("Failed to remove file: {:?}", file_path))
            }
            _ => Ok(()),
        }
    }

    /// Remove the parents of `file_path` that became empty, innermost first
    ///
    /// Stops at the first directory that cannot be removed. Failures are logged
    /// and never propagated.
    pub fn prune_empty_parents(&self, file_path: &Path) {
        let parents = file_path
            .ancestors()
            .skip(1)
            .filter(|parent| !parent.as_os_str().is_empty());

        for parent in parents {
            match std::fs::remove_dir(self.path.join(parent)) {
                Ok(()) => log::debug!("pruned empty directory {}", parent.display()),
                Err(e)
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::DirectoryNotEmpty | std::io::ErrorKind::NotFound
                    ) =>
                {
                    log::debug!("kept directory {}: {e}", parent.display());
                    break;
                }
                Err(e) => {
                    log::warn!("skipped removing directory {}: {e}", parent.display());
                    break;
                }
            }
        }
    }
}
