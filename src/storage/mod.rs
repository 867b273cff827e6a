//!
//! Persistence of a node's clock through a minimal storage collaborator.
//!
//! The clock is written verbatim in its canonical string form. `ClockStore`
//! only relies on the four operations of [`Storage`], so any byte store that
//! can address a directory and a file name can back it.

use std::io;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::StoreError;
use crate::primitives::HybridLogicalClock;

/// Default file name for a persisted clock.
pub const DEFAULT_FILENAME: &str = "clock.hlc";

/// Byte-oriented storage addressed by path.
pub trait Storage {
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Creates `path` and any missing parents. Succeeds if it already exists.
    fn create_directories(&self, path: &Path) -> io::Result<()>;

    /// Writes `bytes` to `path`, replacing previous contents.
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn create_directories(&self, path: &Path) -> io::Result<()> {
        (**self).create_directories(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        (**self).write(path, bytes)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

// Module for the filesystem-backed storage
pub mod fs;

pub use fs::FsStorage;

// Module for the in-memory storage
pub mod memory;

pub use memory::MemoryStorage;

/// Stores and loads a single clock at `directory/filename`.
#[derive(Debug, Clone)]
pub struct ClockStore<S: Storage> {
    storage: S,
    directory: PathBuf,
    filename: String,
}

impl<S: Storage> ClockStore<S> {
    /// A store at `directory/clock.hlc`.
    pub fn new(storage: S, directory: impl Into<PathBuf>) -> Self {
        Self::with_filename(storage, directory, DEFAULT_FILENAME)
    }

    pub fn with_filename(storage: S, directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        ClockStore { storage, directory: directory.into(), filename: filename.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Writes `clock`, creating the directory if needed and replacing any
    /// previously stored clock.
    pub fn store(&self, clock: &HybridLogicalClock) -> Result<(), StoreError> {
        if !self.storage.exists(&self.directory)? {
            tracing::debug!(directory = %self.directory.display(), "Creating clock directory");
            self.storage.create_directories(&self.directory)?;
        }
        let encoded = codec::encode(clock);
        self.storage.write(&self.path(), encoded.as_bytes())?;
        tracing::debug!(path = %self.path().display(), clock = %encoded, "Stored clock");
        Ok(())
    }

    /// Loads the stored clock.
    ///
    /// Returns `Ok(None)` when nothing is stored. Corrupt contents are also
    /// reported as `Ok(None)` (with a warning); use [`ClockStore::load_strict`]
    /// to tell the two apart. Storage failures are always errors.
    pub fn load(&self) -> Result<Option<HybridLogicalClock>, StoreError> {
        match self.load_strict() {
            Err(e @ (StoreError::Corrupt(_) | StoreError::NotUtf8)) => {
                tracing::warn!(path = %self.path().display(), error = %e, "Ignoring corrupt persisted clock");
                Ok(None)
            }
            other => other,
        }
    }

    /// Like [`ClockStore::load`] but surfaces corrupt contents as
    /// `StoreError::Corrupt` or `StoreError::NotUtf8`.
    pub fn load_strict(&self) -> Result<Option<HybridLogicalClock>, StoreError> {
        let path = self.path();
        if !self.storage.exists(&path)? {
            tracing::debug!(path = %path.display(), "No persisted clock");
            return Ok(None);
        }
        let bytes = self.storage.read(&path)?;
        let encoded = String::from_utf8(bytes).map_err(|_| StoreError::NotUtf8)?;
        let clock = codec::decode(&encoded)?;
        tracing::debug!(path = %path.display(), clock = %clock, "Loaded clock");
        Ok(Some(clock))
    }
}
