//! Loading, merging and persisting the JSON config at `<home>/.slog/config.json`.
//!
//! Separated from the struct definitions so the I/O and merge rules stay
//! independent of the serde schema.

mod levels;
mod structs;

pub use levels::{format_levels, parse_levels};
pub use structs::{
    Config, ConfigUpdate, DEFAULT_LEVEL, DEFAULT_LOG_FILE, ParseWriteModeError, WriteMode,
};

use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::{Printer, Style};
use std::path::PathBuf;
use structs::non_empty;

/// Directory under the user's home that holds the config.
pub const CONFIG_DIR: &str = ".slog";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// The configuration manager: every read and write of the config goes through here.
pub struct ConfigStore<'a> {
    fs: &'a dyn FileSystem,
    printer: &'a dyn Printer,
}

impl<'a> ConfigStore<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, printer: &'a dyn Printer) -> Self {
        Self { fs, printer }
    }

    /// `<home>/.slog`.
    ///
    /// # Errors
    /// [`Error::HomeDirUnavailable`] when the platform reports no home directory.
    pub fn config_dir(&self) -> Result<PathBuf, Error> {
        self.fs
            .home_dir()
            .map(|home| home.join(CONFIG_DIR))
            .ok_or(Error::HomeDirUnavailable)
    }

    /// `<home>/.slog/config.json`.
    ///
    /// # Errors
    /// [`Error::HomeDirUnavailable`] when the platform reports no home directory.
    pub fn config_path(&self) -> Result<PathBuf, Error> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Reads and parses the persisted config.
    ///
    /// # Errors
    /// [`Error::ConfigNotFound`] if the file can't be read,
    /// [`Error::ConfigCorrupt`] if it isn't a valid config record.
    pub fn load(&self) -> Result<Config, Error> {
        let path = self.config_path()?;
        tracing::debug!(target: "config", path = %path.display(), "loading");

        let data = self
            .fs
            .read(&path)
            .map_err(|source| Error::ConfigNotFound {
                path: path.clone(),
                source,
            })?;
        let config =
            serde_json::from_slice(&data).map_err(|source| Error::ConfigCorrupt { path, source })?;
        Ok(config)
    }

    /// Merges `update` over the stored config (or the defaults when nothing
    /// loads) and persists the result.
    ///
    /// Validation happens before any filesystem write.
    ///
    /// # Errors
    /// [`Error::InvalidWriteMode`] and [`Error::MissingLogFile`] for bad input;
    /// home, directory and write failures otherwise.
    pub fn save(&self, update: ConfigUpdate) -> Result<Config, Error> {
        let mut config = self.load().unwrap_or_else(|e| {
            tracing::debug!(target: "config", error = %e, "starting from defaults");
            Config::default()
        });

        if let Some(log_file) = non_empty(update.log_file.as_deref()) {
            config.log_file = log_file.to_string();
        }
        if let Some(levels) = update.log_levels.filter(|l| !l.is_empty()) {
            config.log_levels = levels;
        }
        if let Some(level) = non_empty(update.default_level.as_deref()) {
            config.default_level = level.to_string();
        }
        if let Some(mode) = non_empty(update.write_mode.as_deref()) {
            config.write_mode = mode
                .parse()
                .map_err(|_| Error::InvalidWriteMode(mode.to_string()))?;
        }

        if config.log_file.is_empty() {
            return Err(Error::MissingLogFile);
        }

        let dir = self.config_dir()?;
        self.fs
            .create_dir_all(&dir)
            .map_err(|source| Error::DirectoryCreateFailed {
                path: dir.clone(),
                source,
            })?;

        let path = dir.join(CONFIG_FILE);
        let data = serde_json::to_vec_pretty(&config)?;
        self.fs
            .write(&path, &data)
            .map_err(|source| Error::ConfigWriteFailed {
                path: path.clone(),
                source,
            })?;
        tracing::info!(target: "config", path = %path.display(), "saved");

        self.printer.success("Configuration saved successfully");
        self.print_fields(&config);
        Ok(config)
    }

    /// Shows the current config, creating and persisting the defaults first
    /// when none can be loaded.
    ///
    /// # Errors
    /// [`Error::DefaultConfigFailed`] if the defaults can't be saved, or the
    /// reload error if the saved file still can't be read.
    pub fn view(&self) -> Result<Config, Error> {
        let config = match self.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(target: "config", error = %e, "no usable config");
                self.printer
                    .warning("No configuration found. Creating default configuration...");
                self.printer.print("");
                self.save(ConfigUpdate::default())
                    .map_err(|err| Error::DefaultConfigFailed(Box::new(err)))?;
                self.printer.print("");
                self.load()?
            }
        };

        let path = self.config_path()?;
        self.printer.styled("Current Configuration:", Style::Heading);
        self.printer
            .field("Config File", &path.display().to_string());
        self.print_fields(&config);
        Ok(config)
    }

    /// Static usage block for the `config` command.
    pub fn show_usage(&self) {
        let p = self.printer;
        p.styled("Configuration Usage:", Style::Heading);
        p.styled("Set configuration:", Style::Bold);
        p.print(
            "  slog config --file <path> --levels <level:flag,...> --default <level> --mode <append|prepend>",
        );
        p.print("  slog config -f <path> -l <level:flag,...> -d <level> -m <append|prepend>");
        p.print("");
        p.styled("Examples:", Style::Bold);
        p.print(
            "  slog config --file ./app.log --levels 'info:i,warn:w,error:e' --default info --mode append",
        );
        p.print("  slog config -f ./app.log -l 'debug:d,info:i' -d debug -m prepend");
        p.print("");
        p.styled("Flags:", Style::Bold);
        p.print("  --file, -f      Path to log file");
        p.print("  --levels, -l    Log levels in format 'level:flag,level:flag'");
        p.print("  --default, -d   Default log level when no level flag is provided");
        p.print("  --mode, -m      Write mode: 'append' (default) or 'prepend'");
    }

    fn print_fields(&self, config: &Config) {
        self.printer.field("Log File", &config.log_file);
        self.printer
            .field("Log Levels", &format_levels(&config.log_levels));
        self.printer.field("Default Level", &config.default_level);
        self.printer.field("Write Mode", config.write_mode.as_str());
    }
}
