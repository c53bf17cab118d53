use crate::areas::repository::Repository;
use crate::errors::RepositoryError;

impl Repository {
    pub async fn rm(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        // Validate every argument before removing anything
        let mut targets = Vec::new();
        for path in paths {
            let relative = self.resolve_path(path)?;

            if self.workspace().is_dir(&relative) {
                return Err(RepositoryError::NotRecursive(path.to_string()).into());
            }
            if !index.is_tracked(&relative) {
                return Err(RepositoryError::PathNotFound(path.to_string()).into());
            }

            targets.push(relative);
        }

        for path in targets {
            index.remove(&path);
            self.workspace().remove_file(&path)?;
            self.workspace().prune_empty_parents(&path);
        }

        index.write_updates()?;

        Ok(())
    }
}
