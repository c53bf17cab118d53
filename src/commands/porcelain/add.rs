use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::path::PathBuf;

/// Arguments that stand for the whole working tree
const WILDCARDS: [&str; 2] = [".", "*"];

impl Repository {
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        // Resolve every argument before touching the index or the object store
        let mut files = Vec::new();
        let mut deleted = Vec::new();
        for path in paths {
            let (path_files, path_deleted) = self.expand_add_path(path, &index)?;
            files.extend(path_files);
            deleted.extend(path_deleted);
        }

        for path in files {
            let blob = self.workspace().parse_blob(&path)?;
            let mtime = self.workspace().stat_mtime(&path)?;
            let oid = self.database().store(&blob)?;

            index.stage(path, mtime, oid);
        }

        for path in deleted {
            index.remove(&path);
        }

        index.write_updates()?;

        Ok(())
    }

    /// Files to stage and tracked records whose file is gone, for one argument
    fn expand_add_path(
        &self,
        path: &str,
        index: &Index,
    ) -> anyhow::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let relative = if WILDCARDS.contains(&path) {
            PathBuf::new()
        } else {
            self.resolve_path(path)?
        };

        if !self.workspace().exists(&relative) {
            let deleted = index
                .entries()
                .filter(|entry| entry.path.starts_with(&relative))
                .map(|entry| entry.path.clone())
                .collect::<Vec<_>>();

            return if deleted.is_empty() {
                Err(RepositoryError::PathNotFound(path.to_string()).into())
            } else {
                Ok((Vec::new(), deleted))
            };
        }

        let files = self.workspace().list_files(Some(&relative))?;
        if let Some(invalid) = files.iter().find(|file| {
            let name = file.to_string_lossy();
            name.contains('\t') || name.contains('\n')
        }) {
            anyhow::bail!("unsupported path {:?}: paths cannot contain tabs or newlines", invalid);
        }

        let deleted = index
            .entries()
            .filter(|entry| entry.path.starts_with(&relative))
            .filter(|entry| !self.workspace().is_file(&entry.path))
            .map(|entry| entry.path.clone())
            .collect::<Vec<_>>();

        Ok((files, deleted))
    }
}
