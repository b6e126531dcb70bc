//! In-memory File System
//!
//! Backs tests and dry runs. Individual paths can be marked read-only to
//! exercise write-failure handling.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    read_only: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file; content need not be UTF-8
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.lock_files().insert(path.into(), content.into());
    }

    /// Make writes to `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.read_only
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.into());
    }

    /// Current content of a file, if it holds UTF-8 text
    pub fn get(&self, path: &Path) -> Option<String> {
        let bytes = self.lock_files().get(path).cloned()?;
        String::from_utf8(bytes).ok()
    }

    /// Current raw content of a file
    pub fn get_bytes(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock_files().get(path).cloned()
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock_files().keys().cloned().collect()
    }

    /// Snapshot of every file
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.lock_files().clone()
    }

    fn lock_files(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.lock_files()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let denied = self
            .read_only
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path);
        if denied {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.lock_files()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock_files().contains_key(path)
    }
}
