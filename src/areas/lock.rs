//! Repository lock
//!
//! Mutating commands hold an exclusive advisory lock on `.lgit/lgit.lock` for
//! their whole duration. The holder writes its pid into the file and deletes the
//! file before the lock is released, so a lock file that still carries a pid
//! when it is acquired was left behind by a process that died mid-operation.

use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub const LOCK_FILE_NAME: &str = "lgit.lock";

pub struct RepositoryLock {
    path: PathBuf,
    guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the lock at `path` is held by this process
    pub fn acquire(path: &Path) -> anyhow::Result<Self> {
        loop {
            let file = std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .with_context(|| format!("Unable to open lock file {:?}", path))?;
            let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1)
                .with_context(|| format!("Unable to lock {:?}", path))?;

            // the previous holder may have deleted the file while we were waiting
            if !Self::still_names_locked_file(path, &guard)? {
                log::debug!("lock file {:?} was replaced while waiting, retrying", path);
                continue;
            }

            let mut lock = RepositoryLock {
                path: path.to_path_buf(),
                guard,
            };
            lock.report_stale_holder()?;
            lock.write_pid()?;
            log::debug!("acquired repository lock {:?}", lock.path);

            return Ok(lock);
        }
    }

    #[cfg(unix)]
    fn still_names_locked_file(path: &Path, guard: &FileGuard<Box<File>>) -> anyhow::Result<bool> {
        use std::os::unix::fs::MetadataExt;

        match std::fs::metadata(path) {
            Ok(metadata) => {
                let locked = guard.metadata()?;
                Ok(metadata.ino() == locked.ino() && metadata.dev() == locked.dev())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Unable to stat lock file {:?}", path)),
        }
    }

    #[cfg(not(unix))]
    fn still_names_locked_file(path: &Path, _guard: &FileGuard<Box<File>>) -> anyhow::Result<bool> {
        Ok(path.exists())
    }

    fn locked_file(&self) -> &File {
        &self.guard
    }

    fn report_stale_holder(&mut self) -> anyhow::Result<()> {
        let mut content = String::new();
        self.locked_file().read_to_string(&mut content)?;
        let holder = content.trim();

        if !holder.is_empty() {
            log::warn!(
                "Removing stale repository lock {} left by process {holder}; \
                 the previous command did not finish and the repository may be inconsistent",
                self.path.display()
            );
        }

        Ok(())
    }

    fn write_pid(&mut self) -> anyhow::Result<()> {
        let mut file = self.locked_file();
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        writeln!(file, "{}", std::process::id())?;
        file.flush()?;

        Ok(())
    }
}

impl Drop for RepositoryLock {
    fn drop(&mut self) {
        // delete before the guard releases the lock so waiters retry on a fresh file
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("released repository lock {:?}", self.path),
            Err(e) => log::warn!("unable to remove lock file {:?}: {e}", self.path),
        }
    }
}
