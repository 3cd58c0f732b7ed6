//! Every disk access slog makes goes through [`FileSystem`], so the config
//! manager, writer and viewer run unchanged against [`MemoryFileSystem`] in tests.

mod memory;
mod os;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

use std::io;
use std::path::{Path, PathBuf};

/// An open-for-append log file. `close` is explicit because a failed close
/// after a successful write must be observable.
pub trait AppendHandle {
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flushes to stable storage and releases the handle.
    ///
    /// # Errors
    /// I/O errors surfaced while flushing.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// The file-access primitives the core needs, and nothing more.
pub trait FileSystem {
    /// `None` when the platform has no notion of a home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Idempotent: an existing directory is not an error.
    ///
    /// # Errors
    /// Permission or I/O errors from the platform.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// # Errors
    /// `NotFound` when the file is absent, other I/O errors otherwise.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces the whole file, creating it if absent.
    ///
    /// # Errors
    /// Permission or I/O errors from the platform.
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Opens `path` for appending, creating it if absent.
    ///
    /// # Errors
    /// Permission or I/O errors from the platform.
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn AppendHandle + '_>>;
}
