//! End-to-end command dispatch against in-memory capabilities.

use slog::cli::{BuildInfo, dispatch, run};
use slog::{ConfigStore, Error, LineKind, MemoryFileSystem, MemoryPrinter, WriteMode};
use std::ffi::OsString;

const HOME: &str = "/home/tester";
const CONFIG_PATH: &str = "/home/tester/.slog/config.json";
const LOG: &str = "/tmp/dispatch.log";

const BUILD: BuildInfo = BuildInfo {
    version: "1.2.3",
    build_date: None,
    commit: None,
};

fn args(list: &[&str]) -> Vec<OsString> {
    list.iter().map(OsString::from).collect()
}

fn exec(fs: &MemoryFileSystem, printer: &MemoryPrinter, list: &[&str]) -> Result<(), Error> {
    dispatch(&args(list), fs, printer, &BUILD)
}

fn configured() -> (MemoryFileSystem, MemoryPrinter) {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();
    exec(&fs, &printer, &["config", "--file", LOG]).unwrap();
    printer.clear();
    (fs, printer)
}

/// Strips the timestamp prefix from every line in the log.
fn bodies(fs: &MemoryFileSystem) -> Vec<String> {
    fs.contents(LOG)
        .unwrap_or_default()
        .lines()
        .map(|line| line[22..].to_string())
        .collect()
}

#[test]
fn no_arguments_shows_help() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();

    exec(&fs, &printer, &[]).unwrap();

    assert_eq!(printer.texts()[0], "SLog v1.2.3");
    assert!(printer.contains("slog [level-flag] <message>"));
    assert_eq!(fs.write_count(), 0);
}

#[test]
fn help_flags_and_command() {
    for flag in ["--help", "-h", "help"] {
        let fs = MemoryFileSystem::with_home(HOME);
        let printer = MemoryPrinter::new();
        exec(&fs, &printer, &[flag]).unwrap();
        assert!(printer.contains("Commands:"), "{flag}");
    }
}

#[test]
fn version_without_build_metadata() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();

    exec(&fs, &printer, &["-v"]).unwrap();

    assert_eq!(
        printer.texts(),
        vec![
            "SLog v1.2.3",
            "Simple logging tool with configurable levels"
        ]
    );
}

#[test]
fn version_with_build_metadata() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();
    let build = BuildInfo {
        version: "2.0.0",
        build_date: Some("2024-05-01"),
        commit: Some("abc1234"),
    };

    dispatch(&args(&["--version"]), &fs, &printer, &build).unwrap();

    assert!(printer.contains("Build Date: 2024-05-01"));
    assert!(printer.contains("Commit: abc1234"));
}

#[test]
fn version_flag_wins_over_level_flag() {
    let (fs, printer) = configured();
    exec(&fs, &printer, &["config", "-l", "verbose:v"]).unwrap();
    printer.clear();

    exec(&fs, &printer, &["-v", "message"]).unwrap();

    assert!(printer.contains("SLog v1.2.3"));
    assert!(!fs.exists(LOG));
}

#[test]
fn bare_config_shows_configuration_and_usage() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();

    exec(&fs, &printer, &["config"]).unwrap();

    assert!(fs.exists(CONFIG_PATH));
    assert!(printer.contains("Current Configuration:"));
    assert!(printer.contains("Configuration Usage:"));
}

#[test]
fn config_with_only_empty_flags_shows_configuration() {
    let (fs, printer) = configured();
    let writes = fs.write_count();

    exec(&fs, &printer, &["config", "-f", "", "--mode="]).unwrap();

    assert_eq!(fs.write_count(), writes);
    assert!(printer.contains("Configuration Usage:"));
    assert!(printer.contains(&format!("Log File: {LOG}")));
}

#[test]
fn config_long_and_short_flags_update_fields() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();

    exec(
        &fs,
        &printer,
        &[
            "config",
            "--file",
            "./app.log",
            "-l",
            "info:i, warn:w , error:e",
            "-d",
            "warn",
            "--mode",
            "prepend",
        ],
    )
    .unwrap();

    let config = ConfigStore::new(&fs, &printer).load().unwrap();
    assert_eq!(config.log_file, "./app.log");
    assert_eq!(
        config.log_levels.keys().collect::<Vec<_>>(),
        vec!["error", "info", "warn"]
    );
    assert_eq!(config.default_level, "warn");
    assert_eq!(config.write_mode, WriteMode::Prepend);
    assert_eq!(
        printer.texts_of(LineKind::Success),
        vec!["Configuration saved successfully"]
    );
}

#[test]
fn config_levels_drop_malformed_pairs() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["config", "--levels", "info,warn:w,bad:a:b"]).unwrap();

    let config = ConfigStore::new(&fs, &printer).load().unwrap();
    assert_eq!(config.log_levels.len(), 1);
    assert_eq!(config.log_levels.get("warn").map(String::as_str), Some("w"));
}

#[test]
fn config_levels_with_no_valid_pairs_saves_unchanged() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["config", "-l", "garbage"]).unwrap();

    let config = ConfigStore::new(&fs, &printer).load().unwrap();
    assert_eq!(config.log_levels.len(), 4);
    assert!(printer.contains("Configuration saved successfully"));
}

#[test]
fn config_invalid_mode_is_an_error() {
    let (fs, printer) = configured();
    let before = fs.contents(CONFIG_PATH);

    let err = exec(&fs, &printer, &["config", "-m", "reverse"]).unwrap_err();

    assert!(matches!(err, Error::InvalidWriteMode(_)));
    assert_eq!(fs.contents(CONFIG_PATH), before);
}

#[test]
fn config_unknown_flag_is_a_parse_error() {
    let (fs, printer) = configured();

    let err = exec(&fs, &printer, &["config", "--colour", "red"]).unwrap_err();

    assert!(matches!(err, Error::ArgumentParseError(_)));
}

#[test]
fn config_help_is_not_an_error() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["config", "--help"]).unwrap();

    assert!(printer.contains("--levels"));
}

#[test]
fn config_long_flag_wins_over_short() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["config", "-f", "./short.log", "--file", "./long.log"]).unwrap();
    assert_eq!(ConfigStore::new(&fs, &printer).load().unwrap().log_file, "./long.log");

    exec(&fs, &printer, &["config", "--file", "", "-f", "./short.log"]).unwrap();
    assert_eq!(ConfigStore::new(&fs, &printer).load().unwrap().log_file, "./short.log");
}

#[test]
fn config_repeated_flag_keeps_last_value() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["config", "-m", "append", "-m", "prepend"]).unwrap();

    let config = ConfigStore::new(&fs, &printer).load().unwrap();
    assert_eq!(config.write_mode, WriteMode::Prepend);
}

#[test]
fn config_positional_falls_through_to_view() {
    let (fs, printer) = configured();
    let writes = fs.write_count();

    exec(&fs, &printer, &["config", "foo"]).unwrap();

    assert_eq!(fs.write_count(), writes);
    assert!(printer.contains("Current Configuration:"));
    assert!(printer.contains("Configuration Usage:"));
}

#[test]
fn config_stops_parsing_at_first_positional() {
    let (fs, printer) = configured();

    exec(
        &fs,
        &printer,
        &["config", "-f", "./kept.log", "stray", "--mode", "reverse"],
    )
    .unwrap();

    let config = ConfigStore::new(&fs, &printer).load().unwrap();
    assert_eq!(config.log_file, "./kept.log");
    assert_eq!(config.write_mode, WriteMode::Append);
}

#[test]
fn log_requires_configuration() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();

    let err = exec(&fs, &printer, &["hello"]).unwrap_err();

    assert!(matches!(err, Error::NotConfigured));
    assert_eq!(
        err.to_string(),
        "No configuration found. Run 'slog config' first"
    );
    assert!(!fs.exists(CONFIG_PATH));
}

#[test]
fn short_level_flag_selects_level() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["-w", "disk", "almost", "full"]).unwrap();

    assert_eq!(bodies(&fs), vec!["WARN: disk almost full"]);
}

#[test]
fn long_level_flag_selects_level() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["--error", "boom"]).unwrap();

    assert_eq!(bodies(&fs), vec!["ERROR: boom"]);
}

#[test]
fn unmatched_token_becomes_part_of_message() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["-x", "not", "a", "level"]).unwrap();

    assert_eq!(bodies(&fs), vec!["INFO: -x not a level"]);
}

#[test]
fn single_token_is_always_the_message() {
    let (fs, printer) = configured();

    exec(&fs, &printer, &["-w"]).unwrap();

    assert_eq!(bodies(&fs), vec!["INFO: -w"]);
}

#[test]
fn plain_message_uses_default_level() {
    let (fs, printer) = configured();
    exec(&fs, &printer, &["config", "-d", "debug"]).unwrap();

    exec(&fs, &printer, &["Application started"]).unwrap();

    assert_eq!(bodies(&fs), vec!["DEBUG: Application started"]);
}

#[test]
fn colliding_flags_resolve_by_level_name() {
    let (fs, printer) = configured();
    exec(&fs, &printer, &["config", "-l", "warn:x,alert:x"]).unwrap();

    exec(&fs, &printer, &["-x", "collide"]).unwrap();

    assert_eq!(bodies(&fs), vec!["ALERT: collide"]);
}

#[test]
fn empty_message_is_an_error() {
    let (fs, printer) = configured();

    assert!(matches!(
        exec(&fs, &printer, &[""]),
        Err(Error::NoMessageProvided)
    ));
    assert!(matches!(
        exec(&fs, &printer, &["-w", ""]),
        Err(Error::NoMessageProvided)
    ));
    assert!(!fs.exists(LOG));
}

#[cfg(unix)]
#[test]
fn non_utf8_message_is_rejected() {
    use std::os::unix::ffi::OsStringExt;

    let (fs, printer) = configured();
    let argv = vec![
        OsString::from("-i"),
        OsString::from_vec(vec![b'b', b'a', b'd', 0xff]),
    ];

    let err = dispatch(&argv, &fs, &printer, &BUILD).unwrap_err();

    assert!(matches!(err, Error::InvalidEncoding));
    assert!(!fs.exists(LOG));
}

#[test]
fn view_prints_logged_entries() {
    let (fs, printer) = configured();
    exec(&fs, &printer, &["first"]).unwrap();
    exec(&fs, &printer, &["second"]).unwrap();
    printer.clear();

    exec(&fs, &printer, &["view", "--quiet"]).unwrap();

    let raw = printer.texts_of(LineKind::Raw);
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0], fs.contents(LOG).unwrap());
    assert_eq!(printer.lines().len(), 1);
}

#[test]
fn view_short_quiet_flag() {
    let (fs, printer) = configured();
    fs.insert(LOG, "");

    exec(&fs, &printer, &["view", "-q"]).unwrap();

    assert!(printer.is_empty());
}

#[test]
fn view_rejects_unknown_flags() {
    let (fs, printer) = configured();

    let err = exec(&fs, &printer, &["view", "--loud"]).unwrap_err();

    assert!(matches!(err, Error::ArgumentParseError(_)));
}

#[test]
fn view_ignores_trailing_positionals() {
    let (fs, printer) = configured();
    fs.insert(LOG, "entry\n");

    exec(&fs, &printer, &["view", "-q", "extra", "--loud"]).unwrap();

    assert_eq!(printer.output(), "entry\n");
}

#[test]
fn run_prints_errors_in_error_style() {
    let fs = MemoryFileSystem::with_home(HOME);
    let printer = MemoryPrinter::new();

    let _ = run(&args(&["view"]), &fs, &printer, &BUILD);

    let errors = printer.texts_of(LineKind::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Please run 'slog config' first"));
}

#[test]
fn run_is_silent_on_error_channel_when_successful() {
    let (fs, printer) = configured();

    let _ = run(&args(&["-i", "fine"]), &fs, &printer, &BUILD);

    assert!(printer.texts_of(LineKind::Error).is_empty());
    assert_eq!(bodies(&fs), vec!["INFO: fine"]);
}
