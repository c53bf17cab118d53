use crate::artifacts::objects::object::Packable;
use crate::artifacts::stash::stash_entry::StashEntry;
use anyhow::Context;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Append-only stash log (`.lgit/stashes`)
#[derive(Debug)]
pub struct Stashes {
    path: Box<Path>,
}

impl Stashes {
    pub fn new(path: Box<Path>) -> Self {
        Stashes { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &StashEntry) -> anyhow::Result<()> {
        let mut stashes_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())
            .with_context(|| format!("Unable to open stash log {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut stashes_file, file_guard::Lock::Exclusive, 0, 1)?;
        lock.deref_mut()
            .write_all(&entry.serialize()?)
            .with_context(|| format!("Unable to write stash log {:?}", self.path))?;

        Ok(())
    }

    /// Stash records in storage order, oldest first
    pub fn entries(&self) -> anyhow::Result<Vec<StashEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut stashes_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open stash log {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut stashes_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("Unable to read stash log {:?}", self.path))?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(number, line)| StashEntry::parse(line, number + 1))
            .collect()
    }
}
