use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Set the commit author, or print it when `author` is `None`
    pub fn configure(&self, author: Option<&str>) -> anyhow::Result<()> {
        match author {
            Some(author) => {
                let _lock = self.lock()?;
                self.config().set_author(author)
            }
            None => {
                if let Some(author) = self.config().get_author()? {
                    writeln!(self.writer(), "{author}")?;
                }
                Ok(())
            }
        }
    }
}
