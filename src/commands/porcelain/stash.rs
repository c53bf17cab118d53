use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::snapshot::{Snapshot, SnapshotEntry};
use crate::artifacts::stash::stash_entry::StashEntry;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Shelve the staged state and reset the working tree to the current commit
    pub async fn stash(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let branch = self.refs().current_branch()?;
        let head_id = self
            .refs()
            .read_head()?
            .ok_or_else(|| RepositoryError::NoCommits(branch.to_string()))?;
        let head_commit = self.history().load_commit(&head_id)?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        let stash_id = self.history().next_id(self.clock())?;
        let stash_snapshot = index
            .entries()
            .map(|entry| SnapshotEntry::new(entry.staged_oid.clone(), entry.path.clone()))
            .collect::<Snapshot>();
        self.history().store_snapshot(&stash_id, &stash_snapshot)?;

        let stash_entry = StashEntry::new(
            stash_id,
            branch.clone(),
            head_id.to_short_id(),
            head_commit.short_message().to_string(),
        );
        self.stashes().append(&stash_entry)?;
        log::info!("stashed {} entries as {}", stash_snapshot.len(), stash_entry.stash_id());

        writeln!(
            self.writer(),
            "Saved working directory and index state WIP on {}: {} {}",
            branch,
            stash_entry.short_id(),
            stash_entry.message()
        )?;

        let head_snapshot = self.history().load_snapshot(&head_id)?;
        let mut migration = Migration::new(self, &mut index, head_snapshot);
        migration.apply_changes()?;

        index.write_updates()?;

        writeln!(
            self.writer(),
            "HEAD is now at {} {}",
            stash_entry.short_id(),
            stash_entry.message()
        )?;

        Ok(())
    }

    pub fn stash_list(&self) -> anyhow::Result<()> {
        for stash_entry in self.stashes().entries()? {
            writeln!(self.writer(), "{}", stash_entry)?;
        }

        Ok(())
    }

    /// Restoring a stash over the working tree is deferred
    pub fn stash_apply(&mut self, stash: &str) -> anyhow::Result<()> {
        log::debug!("stash apply requested for {}", stash);

        Err(RepositoryError::NotImplemented("stash apply").into())
    }
}
