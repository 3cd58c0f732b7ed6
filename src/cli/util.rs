//! Help and version screens.

use crate::output::{Printer, Style};

/// Build metadata, fixed at compile time.
///
/// Release builds set `SLOG_BUILD_DATE` and `SLOG_COMMIT_SHA` in the build
/// environment; local builds leave them unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_date: Option<&'static str>,
    pub commit: Option<&'static str>,
}

impl BuildInfo {
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build_date: option_env!("SLOG_BUILD_DATE"),
            commit: option_env!("SLOG_COMMIT_SHA"),
        }
    }

    /// `v`-prefixed version for banners.
    #[must_use]
    pub fn display_version(&self) -> String {
        format!("v{}", self.version)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

const TAGLINE: &str = "Simple logging tool with configurable levels";

fn banner(printer: &dyn Printer, build: &BuildInfo) {
    let version = build.display_version();
    printer.line(&[("SLog", Style::Brand), (" ", Style::Plain), (version.as_str(), Style::Dim)]);
}

/// Version banner, plus build date and commit when they were injected.
pub fn print_version(printer: &dyn Printer, build: &BuildInfo) {
    banner(printer, build);
    if let Some(date) = build.build_date {
        printer.styled(&format!("Build Date: {date}"), Style::Dim);
    }
    if let Some(commit) = build.commit {
        printer.styled(&format!("Commit: {commit}"), Style::Dim);
    }
    printer.styled(TAGLINE, Style::Dim);
}

pub fn print_help(printer: &dyn Printer, build: &BuildInfo) {
    banner(printer, build);
    printer.styled(TAGLINE, Style::Dim);
    printer.print("");
    printer.styled("Commands:", Style::Bold);
    printer.print("  config    Show current configuration and usage, or set new configuration");
    printer.print("  view      View log file contents");
    printer.print("  help      Show this help message");
    printer.print("");
    printer.styled("Usage:", Style::Bold);
    printer.print("  slog [level-flag] <message>");
    printer.print("");
    printer.styled("Flags:", Style::Bold);
    printer.print("  --version, -v    Show version information");
    printer.print("  --help, -h       Show this help message");
    printer.print("");
    printer.styled("Examples:", Style::Bold);
    printer.print(
        "  slog config                                                    # Show current config and usage",
    );
    printer.print(
        "  slog config --file ./app.log --levels 'info:i,warn:w,error:e' --default info --mode append",
    );
    printer.print("  slog config -f ./app.log -l 'info:i,warn:w,error:e' -d info -m prepend");
    printer.print(
        "  slog view                                                      # View log file contents",
    );
    printer.print(
        "  slog view --quiet                                              # View log file contents without header",
    );
    printer.print("  slog \"Application started\"");
    printer.print("  slog -i \"Info message\"");
    printer.print("  slog -w \"Warning message\"");
}
