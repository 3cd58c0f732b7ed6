//! `[YYYY-MM-DD HH:MM:SS] LEVEL: message` lines.

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern for the bracketed timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats one newline-terminated entry. The level is uppercased; the message is written as-is.
#[must_use]
pub fn format_entry<Tz>(level: &str, message: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "[{}] {}: {message}\n",
        at.format(TIMESTAMP_FORMAT),
        level.to_uppercase()
    )
}

/// [`format_entry`] stamped with the current local time.
#[must_use]
pub fn format_entry_now(level: &str, message: &str) -> String {
    format_entry(level, message, &Local::now())
}
