//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//!
//! - HEAD: symbolic reference naming the current branch (`ref: refs/heads/<name>`)
//! - Branches: `refs/heads/<name>` holding the id of the branch's latest commit
//!
//! A branch file exists once the branch has a commit; a fresh repository has
//! HEAD pointing at `master` and no branch files.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.lgit`)
    path: Box<Path>,
}

impl Refs {
    /// Branch HEAD points at
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            file: String::from(HEAD_REF_NAME),
            line: 1,
            reason,
        };

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .ok_or_else(|| corrupt(format!("expected a symbolic ref, found '{content}'")))?;

        BranchName::try_parse_ref_path(&symref_match[1]).map_err(|e| corrupt(e.to_string()).into())
    }

    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), format!("ref: {}\n", branch_name.to_ref_path()))?;
        log::info!("HEAD now points at {branch_name}");

        Ok(())
    }

    /// Latest commit of the current branch, if it has any
    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        self.read_ref(&self.current_branch()?)
    }

    pub fn update_head(&self, commit_id: &CommitId) -> anyhow::Result<()> {
        self.update_ref(&self.current_branch()?, commit_id)
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn read_ref(&self, branch_name: &BranchName) -> anyhow::Result<Option<CommitId>> {
        let ref_path = self.branch_path(branch_name);

        if !ref_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        CommitId::try_parse(content.to_string()).map(Some).map_err(|e| {
            RepositoryError::CorruptRecord {
                file: branch_name.to_ref_path(),
                line: 1,
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn update_ref(&self, branch_name: &BranchName, commit_id: &CommitId) -> anyhow::Result<()> {
        self.update_ref_file(&self.branch_path(branch_name), format!("{commit_id}\n"))?;
        log::info!("{branch_name} now points at {commit_id}");

        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, source: &CommitId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()).into());
        }

        self.update_ref(name, source)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        if !heads_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative_path.to_string_lossy().replace('\\', "/")).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
