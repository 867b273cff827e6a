//!
//! In-memory `Storage`, for tests and for embedding without a filesystem.
//! Mirrors filesystem semantics closely enough to catch missing directories.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::Storage;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    directories: HashSet<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryStorage {
    /// Number of files currently held.
    pub fn file_count(&self) -> usize {
        self.inner.lock().files.len()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let inner = self.inner.lock();
        Ok(inner.directories.contains(path) || inner.files.contains_key(path))
    }

    fn create_directories(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.lock();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            if inner.files.contains_key(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} is a file", ancestor.display()),
                ));
            }
            inner.directories.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut inner = self.inner.lock();
        if inner.directories.contains(path) {
            return Err(io::Error::other(format!("{} is a directory", path.display())));
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) => {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory {} does not exist", parent.display()),
                ))
            }
            _ => {
                inner.files.insert(path.to_path_buf(), bytes.to_vec());
                Ok(())
            }
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner.lock().files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display()))
        })
    }
}
