// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory filesystem holding flat files keyed by path.
///
/// Clones share the same storage, so a test can keep a handle while the
/// orchestrator owns another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.lock()
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Raw contents of `path`, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().get(path.as_ref()).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A poisoned map is still a usable map for tests.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("File not found: {:?}", path))
}

impl FileSystem for MockFileSystem {
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut files = self.lock();
        let content = files.get(from).cloned().ok_or_else(|| not_found(from))?;
        files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.lock()
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(contents);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self.lock();
        let content = files.get(path).ok_or_else(|| not_found(path))?;
        String::from_utf8(content.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }
}
