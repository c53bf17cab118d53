use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Walk the parent chain of the current branch, newest first
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let branch = self.refs().current_branch()?;
        let mut curr_commit_id = Some(
            self.refs()
                .read_ref(&branch)?
                .ok_or_else(|| RepositoryError::NoCommits(branch.to_string()))?,
        );
        let mut first = true;

        while let Some(commit_id) = curr_commit_id {
            let commit = self.history().load_commit(&commit_id)?;

            if opts.oneline {
                self.show_commit_oneline(&commit_id, &commit)?;
            } else {
                if !first {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&commit_id, &commit)?;
            }
            first = false;

            // Move to the parent commit for the next iteration
            curr_commit_id = commit.parent().cloned();
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_id: &CommitId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_id).yellow()
        )?;
        writeln!(self.writer(), "Author: {}", commit.author())?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_id: &CommitId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_id.to_short_id().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
