//! Unified error type for all slog operations.
//!
//! Every component returns the first error it hits; the CLI's `run` is the
//! only place that turns one into output and an exit code.

use std::io;
use std::path::PathBuf;

/// Error type for slog operations.
#[derive(Debug)]
pub enum Error {
    /// The platform reported no home directory for the current user.
    HomeDirUnavailable,
    /// `<home>/.slog` could not be created.
    DirectoryCreateFailed { path: PathBuf, source: io::Error },
    /// The config record could not be written.
    ConfigWriteFailed { path: PathBuf, source: io::Error },
    /// The config file could not be read.
    ConfigNotFound { path: PathBuf, source: io::Error },
    /// The config file exists but is not a valid config record.
    ConfigCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The config record could not be serialized.
    ConfigEncode(serde_json::Error),
    /// Auto-creating the default config during a config view failed.
    DefaultConfigFailed(Box<Self>),
    /// Write mode other than `append` or `prepend`.
    InvalidWriteMode(String),
    /// The merged config has an empty log file path.
    MissingLogFile,
    /// Free-form logging was attempted before any config exists.
    NotConfigured,
    /// The message is not valid UTF-8.
    InvalidEncoding,
    /// Opening or writing the log file failed.
    LogWriteFailed { path: PathBuf, source: io::Error },
    /// Reading the log file failed.
    LogReadFailed { path: PathBuf, source: io::Error },
    /// Nothing left to log after the level flag was consumed.
    NoMessageProvided,
    /// Subcommand flags could not be parsed.
    ArgumentParseError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeDirUnavailable => write!(f, "error getting home directory"),
            Self::DirectoryCreateFailed { path, source } => write!(
                f,
                "error creating config directory {}: {source}",
                path.display()
            ),
            Self::ConfigWriteFailed { path, source } => {
                write!(f, "error writing config file {}: {source}", path.display())
            }
            Self::ConfigNotFound { path, source } => write!(
                f,
                "error reading config file {}: {source}\nPlease run 'slog config' first",
                path.display()
            ),
            Self::ConfigCorrupt { path, source } => {
                write!(f, "error parsing config file {}: {source}", path.display())
            }
            Self::ConfigEncode(e) => write!(f, "error encoding config: {e}"),
            Self::DefaultConfigFailed(e) => {
                write!(f, "error creating default configuration: {e}")
            }
            Self::InvalidWriteMode(mode) => {
                write!(f, "write mode must be 'append' or 'prepend' (got '{mode}')")
            }
            Self::MissingLogFile => write!(f, "log file path is required"),
            Self::NotConfigured => write!(f, "No configuration found. Run 'slog config' first"),
            Self::InvalidEncoding => write!(f, "message contains invalid UTF-8"),
            Self::LogWriteFailed { path, source } => {
                write!(f, "error writing to log file {}: {source}", path.display())
            }
            Self::LogReadFailed { path, source } => {
                write!(f, "error reading log file {}: {source}", path.display())
            }
            Self::NoMessageProvided => write!(f, "No message provided"),
            Self::ArgumentParseError(msg) => write!(f, "error parsing arguments: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreateFailed { source, .. }
            | Self::ConfigWriteFailed { source, .. }
            | Self::ConfigNotFound { source, .. }
            | Self::LogWriteFailed { source, .. }
            | Self::LogReadFailed { source, .. } => Some(source),
            Self::ConfigCorrupt { source, .. } => Some(source),
            Self::ConfigEncode(e) => Some(e),
            Self::DefaultConfigFailed(e) => Some(e.as_ref()),
            Self::HomeDirUnavailable
            | Self::InvalidWriteMode(_)
            | Self::MissingLogFile
            | Self::NotConfigured
            | Self::InvalidEncoding
            | Self::NoMessageProvided
            | Self::ArgumentParseError(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigEncode(e)
    }
}
