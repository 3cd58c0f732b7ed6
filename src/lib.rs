//! `slog` - append timestamped, leveled lines to a configured log file.
//!
//! The pipeline is small: load/merge persisted settings, validate input,
//! format a log line and write it to disk in `append` or `prepend` mode.
//! Disk and terminal access go through the [`FileSystem`] and [`Printer`]
//! capabilities so every component runs unchanged against in-memory fakes.
//!
//! # Example
//!
//! ```
//! use slog::{ConfigStore, ConfigUpdate, LogWriter, MemoryFileSystem, MemoryPrinter};
//!
//! let fs = MemoryFileSystem::with_home("/home/me");
//! let printer = MemoryPrinter::new();
//! let store = ConfigStore::new(&fs, &printer);
//!
//! store.save(ConfigUpdate::default().log_file("/tmp/app.log")).unwrap();
//! LogWriter::new(&store, &fs, &printer)
//!     .append(Some("warn"), b"disk almost full")
//!     .unwrap();
//!
//! let content = fs.contents("/tmp/app.log").unwrap();
//! assert!(content.ends_with("] WARN: disk almost full\n"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): command dispatcher and the `slog` binary

// Core modules (always available)
pub mod config;
pub mod error;
pub mod fmt;
pub mod fs;
pub mod logger;
pub mod output;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Config, ConfigStore, ConfigUpdate, WriteMode, format_levels, parse_levels};
pub use error::Error;
pub use fs::{AppendHandle, FileSystem, MemoryFileSystem, OsFileSystem};
pub use logger::{LogViewer, LogWriter};
pub use output::{ConsolePrinter, Line, LineKind, MemoryPrinter, Printer, Style};
