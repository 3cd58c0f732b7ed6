//! Appends or prepends one formatted entry per call.

use super::resolve_log_path;
use crate::config::{ConfigStore, WriteMode};
use crate::error::Error;
use crate::fmt::format_entry_now;
use crate::fs::FileSystem;
use crate::output::Printer;
use std::io;
use std::path::Path;

pub struct LogWriter<'a> {
    store: &'a ConfigStore<'a>,
    fs: &'a dyn FileSystem,
    printer: &'a dyn Printer,
}

impl<'a> LogWriter<'a> {
    #[must_use]
    pub fn new(store: &'a ConfigStore<'a>, fs: &'a dyn FileSystem, printer: &'a dyn Printer) -> Self {
        Self { store, fs, printer }
    }

    /// Writes `message` at `level`, falling back to the configured default
    /// level when `level` is `None` or empty.
    ///
    /// # Errors
    /// The config load error, [`Error::InvalidEncoding`] for non-UTF-8
    /// messages, or the read/write failure of the log file.
    pub fn append(&self, level: Option<&str>, message: &[u8]) -> Result<(), Error> {
        let config = self.store.load()?;
        let message = std::str::from_utf8(message).map_err(|_| Error::InvalidEncoding)?;

        let level = level
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| config.effective_default_level());
        let entry = format_entry_now(level, message);
        let path = resolve_log_path(&config.log_file, self.fs);

        match config.write_mode {
            WriteMode::Prepend => self.prepend(&path, &entry)?,
            WriteMode::Append => self.append_entry(&path, &entry)?,
        }

        tracing::info!(
            target: "writer",
            mode = %config.write_mode,
            path = %path.display(),
            "entry written"
        );
        self.printer
            .success(&format!("Logged to {}", config.log_file));
        Ok(())
    }

    /// No native prepend exists, so the whole file is rewritten.
    fn prepend(&self, path: &Path, entry: &str) -> Result<(), Error> {
        let existing = match self.fs.read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                return Err(Error::LogReadFailed {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut content = Vec::with_capacity(entry.len() + existing.len());
        content.extend_from_slice(entry.as_bytes());
        content.extend_from_slice(&existing);

        self.fs
            .write(path, &content)
            .map_err(|source| Error::LogWriteFailed {
                path: path.to_path_buf(),
                source,
            })
    }

    fn append_entry(&self, path: &Path, entry: &str) -> Result<(), Error> {
        let write_failed = |source: io::Error| Error::LogWriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let mut handle = self.fs.open_append(path).map_err(write_failed)?;
        handle.write_all(entry.as_bytes()).map_err(write_failed)?;

        // The entry is already written; a failed close only warrants a warning.
        if let Err(e) = handle.close() {
            tracing::warn!(target: "writer", error = %e, "close failed");
            self.printer
                .warning(&format!("Warning: failed to close log file: {e}"));
        }
        Ok(())
    }
}
