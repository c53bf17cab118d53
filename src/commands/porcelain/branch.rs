use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create `name` at the current commit, or list branches when `name` is `None`
    pub fn branch(&mut self, name: Option<&str>) -> anyhow::Result<()> {
        match name {
            Some(name) => self.create_branch(name),
            None => self.list_branches(),
        }
    }

    fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let branch_name = BranchName::try_parse(name.to_string())?;

        let current = self.refs().current_branch()?;
        let source_id = self
            .refs()
            .read_head()?
            .ok_or_else(|| RepositoryError::NoCommits(current.to_string()))?;

        self.refs().create_branch(&branch_name, &source_id)?;
        log::info!("created branch {} at {}", branch_name, source_id);

        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;

        for branch in self.refs().list_branches()? {
            if branch == current {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}
