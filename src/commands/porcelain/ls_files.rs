use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Tracked paths, relative to the invocation directory
    pub async fn ls_files(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        index.refresh(self.workspace())?;
        index.write_updates()?;

        for path in index.list_tracked(self.current_dir_relative()) {
            writeln!(self.writer(), "{}", path.display())?;
        }

        Ok(())
    }
}
