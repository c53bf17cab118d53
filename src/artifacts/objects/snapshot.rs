//! Snapshot of staged content
//!
//! A snapshot is the full `(content hash, path)` listing captured at commit (or
//! stash) time, stored as `snapshots/<id>` with one `<hash> <path>` line per entry.
//! Everything after the first space is the path, so paths may contain spaces.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SnapshotEntry {
    pub oid: ObjectId,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    pub fn entries(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SnapshotEntry> for Snapshot {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry>>(iter: I) -> Self {
        Snapshot {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Packable for Snapshot {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = self
            .entries
            .iter()
            .map(|entry| format!("{} {}\n", entry.oid, entry.path.display()))
            .collect::<String>();

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Snapshot {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        reader
            .lines()
            .enumerate()
            .filter(|(_, line)| !matches!(line, Ok(line) if line.is_empty()))
            .map(|(number, line)| -> anyhow::Result<SnapshotEntry> {
                let line = line?;
                let corrupt = |reason: String| RepositoryError::CorruptRecord {
                    file: String::from("snapshot"),
                    line: number + 1,
                    reason,
                };

                let (oid, path) = line
                    .split_once(' ')
                    .ok_or_else(|| corrupt(String::from("expected '<hash> <path>'")))?;
                let oid = ObjectId::try_parse(oid.to_string())
                    .map_err(|e| corrupt(e.to_string()))?;

                Ok(SnapshotEntry::new(oid, PathBuf::from(path)))
            })
            .collect()
    }
}
