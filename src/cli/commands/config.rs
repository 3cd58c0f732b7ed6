//! `slog config [flags]`.

use crate::cli::{ConfigArgs, parse_flags};
use crate::config::{ConfigStore, ConfigUpdate, parse_levels};
use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::Printer;
use std::ffi::OsString;

/// The long form wins; an empty long value defers to the short one.
fn either(long: Option<String>, short: Option<String>) -> Option<String> {
    long.filter(|value| !value.is_empty()).or(short)
}

impl ConfigArgs {
    /// True when every flag is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.file,
            &self.file_short,
            &self.levels,
            &self.levels_short,
            &self.default,
            &self.default_short,
            &self.mode,
            &self.mode_short,
        ]
        .iter()
        .all(|value| value.as_deref().is_none_or(str::is_empty))
    }

    #[must_use]
    pub fn into_update(self) -> ConfigUpdate {
        ConfigUpdate {
            log_file: either(self.file, self.file_short),
            log_levels: either(self.levels, self.levels_short)
                .filter(|levels| !levels.is_empty())
                .map(|levels| parse_levels(&levels)),
            default_level: either(self.default, self.default_short),
            write_mode: either(self.mode, self.mode_short),
        }
    }
}

/// Without flags, shows the current config (creating the defaults if none
/// exists) followed by usage. With flags, merges and saves them.
///
/// # Errors
/// Flag parse failures and any [`ConfigStore`] error.
pub fn cmd_config(args: &[OsString], fs: &dyn FileSystem, printer: &dyn Printer) -> Result<(), Error> {
    let store = ConfigStore::new(fs, printer);

    let parsed = if args.is_empty() {
        ConfigArgs::default()
    } else {
        match parse_flags::<ConfigArgs>(args, printer)? {
            Some(parsed) => parsed,
            None => return Ok(()),
        }
    };

    if parsed.is_empty() {
        store.view()?;
        printer.print("");
        store.show_usage();
        return Ok(());
    }

    store.save(parsed.into_update())?;
    Ok(())
}
