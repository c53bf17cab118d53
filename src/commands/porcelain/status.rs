use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::ENTRY_INDENT;
use crate::artifacts::status::status_info::{ChangeSet, Status, StatusInfo};
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn status(&mut self, porcelain: bool) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        let status = Status::new(self).initialize(&mut index).await?;

        // Refreshed working hashes are persisted
        index.write_updates()?;

        if porcelain {
            self.print_porcelain_status(&status)
        } else {
            self.print_long_status(&status)
        }
    }

    fn print_porcelain_status(&self, status: &StatusInfo) -> anyhow::Result<()> {
        for (file, change) in status.changed_files() {
            writeln!(self.writer(), "{} {}", change, file.display())?;
        }

        for file in status.untracked() {
            writeln!(self.writer(), "?? {}", file.display())?;
        }

        Ok(())
    }

    pub(crate) fn print_long_status(&self, status: &StatusInfo) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "On branch {}",
            self.refs().current_branch()?
        )?;

        if !status.has_commits() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "No commits yet")?;
        }

        self.print_changeset("Changes to be committed", status.to_be_committed())?;
        self.print_changeset("Changes not staged for commit", status.not_staged())?;

        if !status.untracked().is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "Untracked files:")?;
            for file in status.untracked() {
                let file = file.display().to_string();
                writeln!(self.writer(), "{ENTRY_INDENT}{}", file.red())?;
            }
        }

        writeln!(self.writer())?;
        self.print_commit_status(status)
    }

    fn print_changeset(&self, title: &str, changeset: &ChangeSet) -> anyhow::Result<()> {
        if changeset.is_empty() {
            return Ok(());
        }

        writeln!(self.writer())?;
        writeln!(self.writer(), "{title}:")?;
        for (file, change) in changeset {
            writeln!(self.writer(), "{}{}", change, file.display())?;
        }

        Ok(())
    }

    fn print_commit_status(&self, status: &StatusInfo) -> anyhow::Result<()> {
        if !status.to_be_committed().is_empty() {
            return Ok(());
        }

        if !status.not_staged().is_empty() {
            writeln!(
                self.writer(),
                "no changes added to commit (use \"lgit add\")"
            )?;
        } else if !status.untracked().is_empty() {
            writeln!(
                self.writer(),
                "nothing added to commit but untracked files present (use \"lgit add\" to track)"
            )?;
        } else if status.has_commits() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        } else {
            writeln!(
                self.writer(),
                "nothing to commit (create/copy files and use \"lgit add\" to track)"
            )?;
        }

        Ok(())
    }
}
