//! Command dispatcher: one argv in, one action out.
//!
//! Free-form logging takes level flags from the user's config, which a
//! static parser can't know about, so the top level is matched by hand and
//! clap only parses the `config` and `view` flag sets.

pub mod commands;
pub mod util;

use crate::error::Error;
use crate::fs::FileSystem;
use crate::output::Printer;
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

pub use commands::{cmd_config, cmd_log, cmd_view};
pub use util::{BuildInfo, print_help, print_version};

/// Flags of `slog config`. Empty values count as unset.
///
/// Each short flag is its own option and the long form wins when both are
/// given. Repeating a flag keeps the last value. Parsing stops at the first
/// positional argument; it and everything after it are ignored.
#[derive(Debug, Default, Parser)]
#[command(
    name = "slog config",
    about = "Show or update the slog configuration",
    no_binary_name = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ConfigArgs {
    /// Path to log file
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
    /// Path to log file (short)
    #[arg(short = 'f', value_name = "PATH")]
    pub file_short: Option<String>,
    /// Log levels in format 'level:flag,level:flag'
    #[arg(long, value_name = "LEVEL:FLAG,...")]
    pub levels: Option<String>,
    /// Log levels in format 'level:flag,level:flag' (short)
    #[arg(short = 'l', value_name = "LEVEL:FLAG,...")]
    pub levels_short: Option<String>,
    /// Default log level when no level flag is provided
    #[arg(long, value_name = "LEVEL")]
    pub default: Option<String>,
    /// Default log level when no level flag is provided (short)
    #[arg(short = 'd', value_name = "LEVEL")]
    pub default_short: Option<String>,
    /// Write mode: 'append' (default) or 'prepend'
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,
    /// Write mode: 'append' (default) or 'prepend' (short)
    #[arg(short = 'm', value_name = "MODE")]
    pub mode_short: Option<String>,
    #[arg(hide = true, trailing_var_arg = true, num_args = 1..)]
    pub rest: Vec<OsString>,
}

/// Flags of `slog view`. Like `config`, parsing stops at the first positional.
#[derive(Debug, Default, Parser)]
#[command(
    name = "slog view",
    about = "Print the log file",
    no_binary_name = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ViewArgs {
    /// Don't show header, just log contents
    #[arg(short, long)]
    pub quiet: bool,
    #[arg(hide = true, trailing_var_arg = true, num_args = 1..)]
    pub rest: Vec<OsString>,
}

/// Routes `args` (program name excluded) to its command.
///
/// # Errors
/// The first error raised by the selected command.
pub fn dispatch(
    args: &[OsString],
    fs: &dyn FileSystem,
    printer: &dyn Printer,
    build: &BuildInfo,
) -> Result<(), Error> {
    let Some(first) = args.first() else {
        print_help(printer, build);
        return Ok(());
    };

    match first.to_str() {
        Some("--version" | "-v") => {
            print_version(printer, build);
            Ok(())
        }
        Some("--help" | "-h" | "help") => {
            print_help(printer, build);
            Ok(())
        }
        Some("config") => cmd_config(&args[1..], fs, printer),
        Some("view") => cmd_view(&args[1..], fs, printer),
        _ => cmd_log(args, fs, printer),
    }
}

/// The only place errors become output: prints the message in error style
/// and maps it to exit code 1.
#[must_use]
pub fn run(
    args: &[OsString],
    fs: &dyn FileSystem,
    printer: &dyn Printer,
    build: &BuildInfo,
) -> ExitCode {
    match dispatch(args, fs, printer, build) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: "cli", error = ?e, "command failed");
            printer.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Converts a clap failure; `--help` output is printed and treated as success.
fn parse_flags<T: Parser>(args: &[OsString], printer: &dyn Printer) -> Result<Option<T>, Error> {
    match T::try_parse_from(args) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
            printer.print(e.render().to_string().trim_end());
            Ok(None)
        }
        Err(e) => Err(Error::ArgumentParseError(
            e.render().to_string().trim().to_string(),
        )),
    }
}
