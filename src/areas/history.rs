//! Commit history
//!
//! Commits and snapshots are stored side by side, keyed by the same id:
//! `commits/<id>` holds the commit record, `snapshots/<id>` its snapshot. Stash
//! snapshots share the `snapshots/` directory and the id sequence. Records are
//! written once and never rewritten.

use crate::artifacts::core::clock::Clock;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use bytes::Bytes;
use std::io::{Cursor, Write};
use std::path::Path;

#[derive(Debug)]
pub struct History {
    /// Path to the control directory (typically `.lgit`)
    path: Box<Path>,
}

impl History {
    pub fn new(path: Box<Path>) -> Self {
        History { path }
    }

    pub fn commits_path(&self) -> Box<Path> {
        self.path.join("commits").into_boxed_path()
    }

    pub fn snapshots_path(&self) -> Box<Path> {
        self.path.join("snapshots").into_boxed_path()
    }

    /// Fresh id, strictly greater than every id issued so far
    pub fn next_id(&self, clock: &Clock) -> anyhow::Result<CommitId> {
        let latest = self.latest_snapshot_id()?;

        Ok(CommitId::generate(clock.now(), latest.as_ref()))
    }

    /// Greatest snapshot id on disk (commit or stash)
    pub fn latest_snapshot_id(&self) -> anyhow::Result<Option<CommitId>> {
        let snapshots_path = self.snapshots_path();

        if !snapshots_path.is_dir() {
            return Ok(None);
        }

        Ok(std::fs::read_dir(&snapshots_path)
            .with_context(|| format!("Unable to list snapshots in {:?}", snapshots_path))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| CommitId::try_parse(entry.file_name().to_string_lossy().into()).ok())
            .max())
    }

    pub fn store_commit(&self, id: &CommitId, commit: &Commit) -> anyhow::Result<()> {
        self.write_record(&self.commits_path(), id, commit.serialize()?)
    }

    pub fn load_commit(&self, id: &CommitId) -> anyhow::Result<Commit> {
        let content = self.read_record(&self.commits_path(), id)?;

        Commit::deserialize(Cursor::new(content))
    }

    pub fn store_snapshot(&self, id: &CommitId, snapshot: &Snapshot) -> anyhow::Result<()> {
        self.write_record(&self.snapshots_path(), id, snapshot.serialize()?)
    }

    pub fn load_snapshot(&self, id: &CommitId) -> anyhow::Result<Snapshot> {
        let content = self.read_record(&self.snapshots_path(), id)?;

        Snapshot::deserialize(Cursor::new(content))
    }

    fn read_record(&self, dir: &Path, id: &CommitId) -> anyhow::Result<Bytes> {
        let record_path = dir.join(id.as_ref());
        let content = std::fs::read(&record_path)
            .with_context(|| format!("Unable to read record {}", record_path.display()))?;

        Ok(content.into())
    }

    fn write_record(&self, dir: &Path, id: &CommitId, content: Bytes) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;

        let record_path = dir.join(id.as_ref());
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&record_path)
            .with_context(|| format!("Unable to create record {}", record_path.display()))?;

        file.write_all(&content)
            .with_context(|| format!("Unable to write record {}", record_path.display()))?;

        Ok(())
    }
}
