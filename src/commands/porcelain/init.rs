use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

/// Environment variable seeding the author of a new repository
const AUTHOR_ENV: &str = "LOGNAME";

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized(self.path().to_path_buf()).into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .lgit/objects directory")?;

        fs::create_dir_all(self.history().commits_path())
            .context("Failed to create .lgit/commits directory")?;

        fs::create_dir_all(self.history().snapshots_path())
            .context("Failed to create .lgit/snapshots directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .lgit/refs/heads directory")?;

        self.refs()
            .set_head(&BranchName::try_parse(DEFAULT_BRANCH.to_string())?)
            .context("Failed to create initial HEAD reference")?;

        let author = std::env::var(AUTHOR_ENV).unwrap_or_default();
        self.config()
            .set_author(&author)
            .context("Failed to create .lgit/config file")?;

        let index = self.index();
        let index = index.lock().await;
        fs::write(index.path(), b"").context("Failed to create .lgit/index file")?;

        writeln!(
            self.writer(),
            "Initialized empty lgit repository in {}",
            self.control_path().display()
        )?;

        Ok(())
    }
}
