//! Index (staging area)
//!
//! The index tracks every path that will be part of the next commit. It is held
//! in memory as an insertion-ordered record set and persisted wholesale:
//! `rehydrate` loads it, `write_updates` flushes it back when it changed.
//!
//! See `artifacts::index` for the on-disk record format.

use crate::areas::workspace::Workspace;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.lgit/index`)
    path: Box<Path>,
    /// Records in insertion order
    entries: Vec<IndexEntry>,
    /// Position of each record in `entries`, keyed by path
    positions: HashMap<PathBuf, usize>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            positions: HashMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.positions.get(path).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A record exists for exactly this path
    pub fn is_tracked(&self, path: &Path) -> bool {
        self.positions.contains_key(path)
    }

    /// Paths of `snapshot` with no record, i.e. removed with `rm` since it was taken
    pub fn removed_since<'s>(&'s self, snapshot: &'s Snapshot) -> impl Iterator<Item = &'s Path> {
        snapshot
            .entries()
            .map(|entry| entry.path.as_path())
            .filter(|path| !self.is_tracked(path))
    }

    /// Some record lives below this directory
    pub fn is_tracked_dir(&self, path: &Path) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.parent_dirs().contains(&path))
    }

    /// Drop every record
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
        self.positions.clear();
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file yields an empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.positions.clear();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("Unable to read index file {:?}", self.path))?;

        for (number, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let entry = IndexEntry::parse(line, number + 1)?;
            self.store_entry(entry);
        }

        Ok(())
    }

    /// Rewrite the index file if any record changed since loading
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut content = Vec::new();
        for entry in self.entries() {
            content.extend_from_slice(&entry.serialize()?);
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("Unable to open index file {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;
        lock.deref_mut()
            .write_all(&content)
            .with_context(|| format!("Unable to write index file {:?}", self.path))?;

        self.changed = false;

        Ok(())
    }

    fn store_entry(&mut self, entry: IndexEntry) {
        match self.positions.get(&entry.path) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.positions.insert(entry.path.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Insert a record, replacing any record with the same path in place
    pub fn add(&mut self, entry: IndexEntry) {
        self.store_entry(entry);
        self.changed = true;
    }

    /// Record a fresh `add` of `path`
    ///
    /// New paths get a record with working and staged hashes set and no committed
    /// hash. Tracked paths keep their position and committed hash.
    pub fn stage(&mut self, path: PathBuf, mtime: NaiveDateTime, oid: ObjectId) {
        match self.positions.get(&path) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                if entry.mtime != mtime || entry.working_oid != oid || entry.staged_oid != oid {
                    entry.stage(mtime, oid);
                    self.changed = true;
                }
            }
            None => self.add(IndexEntry::new(path, mtime, oid)),
        }
    }

    pub fn remove(&mut self, path: &Path) -> Option<IndexEntry> {
        let position = self.positions.remove(path)?;
        let entry = self.entries.remove(position);

        for (index, entry) in self.entries.iter().enumerate().skip(position) {
            self.positions.insert(entry.path.clone(), index);
        }
        self.changed = true;

        Some(entry)
    }

    /// Set every committed hash to the staged hash, keeping record order
    pub fn mark_committed(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.mark_committed();
        }
        self.changed = true;
    }

    /// Recompute mtime and working hash of every tracked path still present
    ///
    /// Staged and committed hashes are left untouched; missing paths are skipped.
    pub fn refresh(&mut self, workspace: &Workspace) -> anyhow::Result<()> {
        for entry in self.entries.iter_mut() {
            if !workspace.is_file(&entry.path) {
                continue;
            }

            let mtime = workspace.stat_mtime(&entry.path)?;
            let oid = workspace.parse_blob(&entry.path)?.object_id()?;

            if entry.mtime != mtime || entry.working_oid != oid {
                entry.observe(mtime, oid);
                self.changed = true;
            }
        }

        Ok(())
    }

    /// Tracked paths under `relative_to`, rewritten relative to it, sorted
    ///
    /// `relative_to` is repository-relative; an empty path means the root.
    pub fn list_tracked(&self, relative_to: &Path) -> Vec<PathBuf> {
        let mut paths = self
            .entries
            .iter()
            .filter_map(|entry| entry.path.strip_prefix(relative_to).ok())
            .filter(|path| !path.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect::<Vec<_>>();
        paths.sort();

        paths
    }
}
