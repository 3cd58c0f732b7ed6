//! Prints the configured log file.

use super::resolve_log_path;
use crate::config::ConfigStore;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::{Printer, Style};

pub struct LogViewer<'a> {
    store: &'a ConfigStore<'a>,
    fs: &'a dyn FileSystem,
    printer: &'a dyn Printer,
}

impl<'a> LogViewer<'a> {
    #[must_use]
    pub fn new(store: &'a ConfigStore<'a>, fs: &'a dyn FileSystem, printer: &'a dyn Printer) -> Self {
        Self { store, fs, printer }
    }

    /// Prints the log file verbatim, preceded by a header unless `quiet`.
    ///
    /// An empty file is not an error. A missing one is.
    ///
    /// # Errors
    /// The config load error, or [`Error::LogReadFailed`].
    pub fn view(&self, quiet: bool) -> Result<(), Error> {
        let config = self.store.load()?;
        let path = resolve_log_path(&config.log_file, self.fs);

        let data = self.fs.read(&path).map_err(|source| Error::LogReadFailed {
            path: path.clone(),
            source,
        })?;

        if data.is_empty() {
            if !quiet {
                self.printer.line(&[
                    ("Log file is empty: ", Style::Bold),
                    (config.log_file.as_str(), Style::Plain),
                ]);
            }
            return Ok(());
        }

        if !quiet {
            self.printer.line(&[
                ("Log file contents: ", Style::Bold),
                (config.log_file.as_str(), Style::Plain),
            ]);
            self.printer.print("");
        }
        self.printer.raw(&String::from_utf8_lossy(&data));
        Ok(())
    }
}
