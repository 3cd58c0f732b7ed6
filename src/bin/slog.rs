//! `slog` - append timestamped, leveled lines to a configured log file.
//!
//! Usage:
//!   slog                                 Show help
//!   slog [level-flag] <message>          Log a message
//!   slog config [flags]                  Show or update configuration
//!   slog view [--quiet]                  Print the log file
//!   slog help | --help | -h              Show help
//!   slog --version | -v                  Show version

use slog::cli::{self, BuildInfo};
use slog::{ConsolePrinter, OsFileSystem};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Directives for slog's own diagnostics, e.g. `SLOG_LOG=debug` or `SLOG_LOG=writer=trace`.
const LOG_ENV: &str = "SLOG_LOG";

/// Diagnostics stay off unless `SLOG_LOG` holds a valid filter. They go to
/// stderr so stdout carries only command output.
fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    // Before any command runs so config diagnostics are captured
    init_tracing();

    // OsString so non-UTF-8 message bytes reach the writer's encoding check instead of panicking here
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let fs = OsFileSystem::new();
    let printer = ConsolePrinter::new();
    cli::run(&args, &fs, &printer, &BuildInfo::current())
}
