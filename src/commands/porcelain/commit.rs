use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::snapshot::{Snapshot, SnapshotEntry};
use crate::artifacts::status::status_info::Status;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: Option<&str>) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let author = self.config().get_author()?.ok_or(RepositoryError::NoAuthor)?;
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .ok_or(RepositoryError::MissingMessage)?
            .to_string();

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        // Nothing tracked: report like status does and record nothing
        if index.is_empty() {
            let status = Status::new(self).initialize(&mut index).await?;
            index.write_updates()?;

            return self.print_long_status(&status);
        }

        let branch = self.refs().current_branch()?;
        let parent = self.refs().read_ref(&branch)?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit_id = self.history().next_id(self.clock())?;
        let snapshot = index
            .entries()
            .map(|entry| SnapshotEntry::new(entry.staged_oid.clone(), entry.path.clone()))
            .collect::<Snapshot>();
        let commit = Commit::new(parent, author, *commit_id.timestamp(), message);

        self.history().store_snapshot(&commit_id, &snapshot)?;
        self.history().store_commit(&commit_id, &commit)?;

        index.mark_committed();
        index.write_updates()?;

        self.refs().update_ref(&branch, &commit_id)?;
        log::info!("{} now points at {}", branch, commit_id);

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            branch,
            is_root,
            commit_id.to_short_id(),
            commit.short_message()
        )?;

        Ok(())
    }
}
