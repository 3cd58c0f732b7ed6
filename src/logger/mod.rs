//! Writing entries to and reading back the configured log file.

mod viewer;
mod writer;

pub use viewer::LogViewer;
pub use writer::LogWriter;

use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// Expands a leading `~` against the filesystem's home directory, so the log
/// path and the config path resolve under the same home. Without a home the
/// path is used as written.
pub(crate) fn resolve_log_path(log_file: &str, fs: &dyn FileSystem) -> PathBuf {
    shellexpand::path::tilde_with_context(Path::new(log_file), || fs.home_dir()).into_owned()
}
