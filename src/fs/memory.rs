//! In-memory [`FileSystem`] with failure injection, for tests and doc examples.

use super::{AppendHandle, FileSystem};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// Files and directories live in maps keyed by the exact path they were written under.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    home: Option<PathBuf>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    /// Reads of these paths fail with the given kind even if the file exists.
    read_failures: RefCell<BTreeMap<PathBuf, io::ErrorKind>>,
    writes: Cell<usize>,
    fail_mkdir: Cell<bool>,
    fail_writes: Cell<bool>,
    fail_open: Cell<bool>,
    fail_close: Cell<bool>,
}

impl MemoryFileSystem {
    /// A filesystem whose user has no home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            ..Self::default()
        }
    }

    /// Seeds a file without counting it as a write.
    pub fn insert(&self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), data.into());
    }

    #[must_use]
    pub fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// File content decoded lossily, for assertions.
    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.bytes(path)
            .map(|data| String::from_utf8_lossy(&data).into_owned())
    }

    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.files.borrow().contains_key(path.as_ref())
    }

    #[must_use]
    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    /// Number of successful `write` calls plus appended chunks.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn fail_read(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.read_failures.borrow_mut().insert(path.into(), kind);
    }

    pub fn fail_mkdir(&self, fail: bool) {
        self.fail_mkdir.set(fail);
    }

    /// Applies to both `write` and appends through an open handle.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn fail_open(&self, fail: bool) {
        self.fail_open.set(fail);
    }

    pub fn fail_close(&self, fail: bool) {
        self.fail_close.set(fail);
    }

    fn injected(what: &str) -> io::Error {
        io::Error::other(format!("injected {what} failure"))
    }
}

struct MemoryAppendHandle<'a> {
    fs: &'a MemoryFileSystem,
    path: PathBuf,
}

impl AppendHandle for MemoryAppendHandle<'_> {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        if self.fs.fail_writes.get() {
            return Err(MemoryFileSystem::injected("write"));
        }
        self.fs
            .files
            .borrow_mut()
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(data);
        self.fs.writes.set(self.fs.writes.get() + 1);
        Ok(())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        if self.fs.fail_close.get() {
            return Err(MemoryFileSystem::injected("close"));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.fail_mkdir.get() {
            return Err(Self::injected("mkdir"));
        }
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if let Some(kind) = self.read_failures.borrow().get(path) {
            return Err(io::Error::from(*kind));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(Self::injected("write"));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn open_append(&self, path: &Path) -> io::Result<Box<dyn AppendHandle + '_>> {
        if self.fail_open.get() {
            return Err(Self::injected("open"));
        }
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default();
        Ok(Box::new(MemoryAppendHandle {
            fs: self,
            path: path.to_path_buf(),
        }))
    }
}
