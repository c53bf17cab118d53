use anyhow::Context;
use std::path::Path;

/// Commit author value (`.lgit/config`), a single line of text
#[derive(Debug)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn new(path: Box<Path>) -> Self {
        Config { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured author, `None` when unset or blank
    pub fn get_author(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read config {:?}", self.path))?;
        let author = content.lines().next().unwrap_or_default().trim();

        Ok((!author.is_empty()).then(|| author.to_string()))
    }

    pub fn set_author(&self, author: &str) -> anyhow::Result<()> {
        let content = if author.trim().is_empty() {
            String::new()
        } else {
            format!("{}\n", author.trim())
        };

        std::fs::write(&self.path, content)
            .with_context(|| format!("Unable to write config {:?}", self.path))
    }
}
