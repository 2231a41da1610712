use std::{
    fs::{File, OpenOptions},
    io,
    path::Path,
};

use fd_lock::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("failed to open lock file: {0}")]
    Open(#[source] io::Error),
    #[error("failed to acquire lock: {0}")]
    Acquire(#[source] io::Error),
    #[error("lock was contended")]
    Contended,
}

/// A cross-process reader-writer lock keyed on a source's identifier, backed by a dotfile next to
/// the source's persisted data. Search and open-for-read take [`NamedLock::read`]; add, update and
/// remove take [`NamedLock::write`].
pub struct NamedLock {
    inner: RwLock<File>,
}

impl NamedLock {
    pub fn open(path: &Path) -> Result<Self, LockError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(LockError::Open)?;
        Ok(Self { inner: RwLock::new(file) })
    }

    pub fn read(&mut self) -> Result<RwLockReadGuard<'_, File>, LockError> {
        self.inner.read().map_err(LockError::Acquire)
    }

    pub fn write(&mut self) -> Result<RwLockWriteGuard<'_, File>, LockError> {
        self.inner.write().map_err(LockError::Acquire)
    }

    /// Attempts to take the exclusive lock without blocking, as a background source update does.
    /// Returns [`LockError::Contended`] rather than blocking if another process holds it.
    pub fn try_write(&mut self) -> Result<RwLockWriteGuard<'_, File>, LockError> {
        self.inner.try_write().map_err(|err| match err.kind() {
            io::ErrorKind::WouldBlock => LockError::Contended,
            _ => LockError::Acquire(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn shared_reads_do_not_conflict_and_write_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.lock");

        let mut lock = NamedLock::open(&path).unwrap();
        {
            let _guard = lock.write().unwrap();
        }
        {
            let _guard = lock.read().unwrap();
        }
    }
}
