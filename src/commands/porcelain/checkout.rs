use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    pub async fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let current = self.refs().current_branch()?;

        if self.refs().list_branches()?.is_empty() {
            return Err(RepositoryError::NoCommits(current.to_string()).into());
        }

        let unknown = || RepositoryError::UnknownBranch(target.to_string());
        let target = BranchName::try_parse(target.to_string()).map_err(|_| unknown())?;
        let target_id = self.refs().read_ref(&target)?.ok_or_else(unknown)?;

        if target == current {
            writeln!(self.writer(), "Already on '{}'", target)?;
            return Ok(());
        }

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        index.refresh(self.workspace())?;

        let current_id = self.refs().read_head()?;
        let needs_reset = current_id.as_ref() != Some(&target_id);
        let snapshot = if needs_reset {
            self.history().load_snapshot(&target_id)?
        } else {
            Snapshot::default()
        };

        let mut migration = Migration::new(self, &mut index, snapshot);
        migration.check_conflicts()?;
        if needs_reset {
            migration.apply_changes()?;
        }

        index.write_updates()?;
        self.refs().set_head(&target)?;
        log::info!("HEAD now points at {}", target);

        writeln!(self.writer(), "Switched to branch '{}'", target)?;

        Ok(())
    }
}
