//! Free-form logging: `slog [level-flag] <message...>`.

use crate::config::ConfigStore;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::logger::LogWriter;
use crate::output::Printer;
use std::ffi::OsString;

/// A lone token is always the message. With more, a first token matching a
/// configured `-<flag>` or `--<level>` selects the level and the rest is the
/// message; otherwise every token is part of the message.
///
/// # Errors
/// [`Error::NotConfigured`] before any config exists,
/// [`Error::NoMessageProvided`] for an empty message, and writer errors.
pub fn cmd_log(args: &[OsString], fs: &dyn FileSystem, printer: &dyn Printer) -> Result<(), Error> {
    let store = ConfigStore::new(fs, printer);
    let config = store.load().map_err(|e| {
        tracing::debug!(target: "cli", error = %e, "config unavailable");
        Error::NotConfigured
    })?;

    let (level, words) = match args {
        [first, rest @ ..] if !rest.is_empty() => first
            .to_str()
            .and_then(|token| config.level_for_flag(token))
            .map_or((None, args), |level| (Some(level), rest)),
        _ => (None, args),
    };

    let message = join_words(words);
    if message.is_empty() {
        return Err(Error::NoMessageProvided);
    }

    tracing::debug!(target: "cli", level = level.unwrap_or("(default)"), "level selector");
    LogWriter::new(&store, fs, printer).append(level, &message)
}

/// Space-joins the raw argument bytes; encoding is checked by the writer.
fn join_words(words: &[OsString]) -> Vec<u8> {
    let mut message = Vec::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            message.push(b' ');
        }
        message.extend_from_slice(word.as_encoded_bytes());
    }
    message
}
