use crate::areas::CONTROL_DIR;
use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::history::History;
use crate::areas::index::Index;
use crate::areas::lock::{LOCK_FILE_NAME, RepositoryLock};
use crate::areas::refs::Refs;
use crate::areas::stashes::Stashes;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::clock::Clock;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Repository {
    path: Box<Path>,
    current_dir: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    history: History,
    stashes: Stashes,
    config: Config,
    clock: Clock,
}

impl Repository {
    /// Repository rooted at `path`, which need not be initialized yet
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create directory {}", path.display()))?;
        }

        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let control_path = path.join(CONTROL_DIR);

        Ok(Repository {
            current_dir: path.clone().into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(Index::new(
                control_path.join("index").into_boxed_path(),
            ))),
            database: Database::new(control_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(control_path.clone().into_boxed_path()),
            history: History::new(control_path.clone().into_boxed_path()),
            stashes: Stashes::new(control_path.join("stashes").into_boxed_path()),
            config: Config::new(control_path.join("config").into_boxed_path()),
            clock: Clock::from_env()?,
            path: path.into_boxed_path(),
        })
    }

    /// Repository enclosing `current_dir`, searched through its ancestors
    pub fn discover(current_dir: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let current_dir = current_dir
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", current_dir.display()))?;

        let root = current_dir
            .ancestors()
            .find(|dir| dir.join(CONTROL_DIR).is_dir())
            .ok_or_else(|| RepositoryError::NotARepository(current_dir.clone()))?;

        let mut repository = Self::new(root, writer)?;
        repository.current_dir = current_dir.into_boxed_path();

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stashes(&self) -> &Stashes {
        &self.stashes
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Hold the repository lock until the returned guard is dropped
    pub fn lock(&self) -> anyhow::Result<RepositoryLock> {
        RepositoryLock::acquire(&self.control_path().join(LOCK_FILE_NAME))
    }

    /// Invocation directory relative to the repository root (empty at the root)
    pub fn current_dir_relative(&self) -> &Path {
        self.current_dir
            .strip_prefix(&self.path)
            .unwrap_or_else(|_| Path::new(""))
    }

    /// Turn a command-line path, relative to the invocation directory, into a
    /// repository-relative one
    ///
    /// Resolution is lexical so paths of deleted files still resolve. Paths
    /// outside the repository or inside the control directory are `PathNotFound`.
    pub fn resolve_path(&self, path: &str) -> anyhow::Result<PathBuf> {
        let mut resolved = PathBuf::new();
        for component in self.current_dir.join(path).components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                other => resolved.push(other),
            }
        }

        let not_found = || RepositoryError::PathNotFound(path.to_string());
        let relative = resolved.strip_prefix(&self.path).map_err(|_| not_found())?;

        if relative.starts_with(CONTROL_DIR) {
            return Err(not_found().into());
        }

        Ok(relative.to_path_buf())
    }
}
