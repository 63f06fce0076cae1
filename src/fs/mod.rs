// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod mock;

/// Abstract filesystem interface.
///
/// Errors stay `std::io::Error` so callers surface them as IO failures; the
/// message is prefixed with the path(s) involved.
pub trait FileSystem: Send + Sync + Debug {
    /// Copy `from` to `to`, replacing `to` if it exists.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Append `contents` to `path`, creating the file if needed.
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| with_context(e, format!("copying {:?} to {:?}", from, to)))
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| with_context(e, format!("opening {:?} for append", path)))?;
        file.write_all(contents)
            .map_err(|e| with_context(e, format!("appending to {:?}", path)))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path).map_err(|e| with_context(e, format!("reading file {:?}", path)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Keep the error kind, prepend what we were doing.
fn with_context(err: io::Error, what: String) -> io::Error {
    io::Error::new(err.kind(), format!("{what}: {err}"))
}
