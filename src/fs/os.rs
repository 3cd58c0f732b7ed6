//! Production [`FileSystem`] backed by `std::fs`.

use super::{AppendHandle, FileSystem};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Talks to the real disk; the home directory comes from `directories`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

struct OsAppendHandle {
    file: File,
}

impl AppendHandle for OsAppendHandle {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    fn close(mut self: Box<Self>) -> io::Result<()> {
        self.file.flush()?;
        self.file.sync_all()
    }
}

impl FileSystem for OsFileSystem {
    fn home_dir(&self) -> Option<PathBuf> {
        directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tracing::trace!(target: "fs", path = %path.display(), "create_dir_all");
        fs::create_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tracing::trace!(target: "fs", path = %path.display(), "read");
        fs::read(path)
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        tracing::trace!(target: "fs", path = %path.display(), bytes = data.len(), "write");
        fs::write(path, data)
    }

    fn open_append(&self, path: &Path) -> io::Result<Box<dyn AppendHandle + '_>> {
        tracing::trace!(target: "fs", path = %path.display(), "open_append");
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Box::new(OsAppendHandle { file }))
    }
}
