//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stackgen_core::application::ApplicationError;
use stackgen_core::application::ports::Filesystem;
use stackgen_core::error::StackgenResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Pre-seed a file, creating parent directories (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &[u8]) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent).unwrap();
        }
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path, content.to_vec());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StackgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn dir_is_empty(&self, path: &Path) -> StackgenResult<bool> {
        let inner = self.inner.read().map_err(|_| lock_error())?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        let has_entry = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p.parent() == Some(path));
        Ok(!has_entry)
    }
}

fn lock_error() -> stackgen_core::error::StackgenError {
    stackgen_core::error::StackgenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}
