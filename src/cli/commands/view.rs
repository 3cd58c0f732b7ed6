//! `slog view [--quiet]`.

use crate::cli::{ViewArgs, parse_flags};
use crate::config::ConfigStore;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::logger::LogViewer;
use crate::output::Printer;
use std::ffi::OsString;

/// # Errors
/// Flag parse failures, config load failures and log read failures.
pub fn cmd_view(args: &[OsString], fs: &dyn FileSystem, printer: &dyn Printer) -> Result<(), Error> {
    let Some(parsed) = parse_flags::<ViewArgs>(args, printer)? else {
        return Ok(());
    };

    let store = ConfigStore::new(fs, printer);
    LogViewer::new(&store, fs, printer).view(parsed.quiet)
}
