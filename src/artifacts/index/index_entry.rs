//! Index entry representation
//!
//! Each entry tracks one path through three content hashes:
//!
//! - `working_oid`: content last observed in the working tree (add, status refresh)
//! - `staged_oid`: content captured by the last `add`
//! - `committed_oid`: content recorded by the last commit including the path
//!
//! Status is derived from these hashes alone: `staged != committed` means the
//! path has changes to be committed, `working != staged` means it has changes
//! not staged for commit. Both can hold at once.

use crate::artifacts::index::{FIELD_COUNT, FIELD_SEPARATOR, MTIME_FORMAT, UNSET_HASH};
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub path: PathBuf,
    /// Last observed modification time, second precision
    pub mtime: NaiveDateTime,
    pub working_oid: ObjectId,
    pub staged_oid: ObjectId,
    pub committed_oid: Option<ObjectId>,
}

impl IndexEntry {
    /// Entry for a path staged for the first time
    pub fn new(path: PathBuf, mtime: NaiveDateTime, oid: ObjectId) -> Self {
        IndexEntry {
            path,
            mtime,
            working_oid: oid.clone(),
            staged_oid: oid,
            committed_oid: None,
        }
    }

    /// Entry for a path materialized from a snapshot: all three hashes agree
    pub fn new_committed(path: PathBuf, mtime: NaiveDateTime, oid: ObjectId) -> Self {
        IndexEntry {
            committed_oid: Some(oid.clone()),
            ..Self::new(path, mtime, oid)
        }
    }

    /// Record a fresh `add`: working and staged content both become `oid`
    pub fn stage(&mut self, mtime: NaiveDateTime, oid: ObjectId) {
        self.mtime = mtime;
        self.working_oid = oid.clone();
        self.staged_oid = oid;
    }

    /// Record the content currently in the working tree without staging it
    pub fn observe(&mut self, mtime: NaiveDateTime, oid: ObjectId) {
        self.mtime = mtime;
        self.working_oid = oid;
    }

    pub fn mark_committed(&mut self) {
        self.committed_oid = Some(self.staged_oid.clone());
    }

    pub fn has_staged_changes(&self) -> bool {
        self.committed_oid.as_ref() != Some(&self.staged_oid)
    }

    pub fn has_workspace_changes(&self) -> bool {
        self.working_oid != self.staged_oid
    }

    /// Working or staged content diverges from the last commit
    pub fn is_dirty(&self) -> bool {
        self.committed_oid.as_ref() != Some(&self.working_oid) || self.has_staged_changes()
    }

    pub fn parent_dirs(&self) -> Vec<&Path> {
        let mut dirs = self
            .path
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect::<Vec<_>>();
        dirs.reverse();

        dirs
    }

    /// Parse one index line; `line` is the 1-based line number used in errors
    pub fn parse(record: &str, line: usize) -> anyhow::Result<Self> {
        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            file: String::from("index"),
            line,
            reason,
        };

        let fields = record.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect::<Vec<_>>();
        let [mtime, working, staged, committed, path] = fields[..] else {
            return Err(corrupt(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            ))
            .into());
        };

        if path.is_empty() {
            return Err(corrupt(String::from("empty path")).into());
        }

        let mtime = NaiveDateTime::parse_from_str(mtime, MTIME_FORMAT)
            .map_err(|e| corrupt(format!("invalid mtime '{mtime}': {e}")))?;
        let parse_oid = |oid: &str| {
            ObjectId::try_parse(oid.to_string()).map_err(|e| corrupt(e.to_string()))
        };
        let committed_oid = match committed {
            UNSET_HASH => None,
            committed => Some(parse_oid(committed)?),
        };

        Ok(IndexEntry {
            path: PathBuf::from(path),
            mtime,
            working_oid: parse_oid(working)?,
            staged_oid: parse_oid(staged)?,
            committed_oid,
        })
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let path = self
            .path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid entry path {:?}", self.path))?;
        let committed = self
            .committed_oid
            .as_ref()
            .map(|oid| oid.as_ref())
            .unwrap_or(UNSET_HASH);

        let record = [
            self.mtime.format(MTIME_FORMAT).to_string().as_str(),
            self.working_oid.as_ref(),
            self.staged_oid.as_ref(),
            committed,
            path,
        ]
        .join(&FIELD_SEPARATOR.to_string());

        Ok(Bytes::from(format!("{record}\n")))
    }
}
