//! The persisted config record and the partial update merged into it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOG_FILE: &str = "./log.txt";
pub const DEFAULT_LEVEL: &str = "info";

/// Where new entries land in the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// End of file; a single append-mode write.
    #[default]
    Append,
    /// Start of file; rewrites the whole file on every entry.
    Prepend,
}

impl WriteMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Prepend => "prepend",
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWriteModeError(String);

impl fmt::Display for ParseWriteModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown write mode: '{}'", self.0)
    }
}

impl std::error::Error for ParseWriteModeError {}

impl FromStr for WriteMode {
    type Err = ParseWriteModeError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "append" => Ok(Self::Append),
            "prepend" => Ok(Self::Prepend),
            _ => Err(ParseWriteModeError(s.to_string())),
        }
    }
}

/// Singleton record stored at `<home>/.slog/config.json`.
///
/// Fields absent from the file take their defaults, so a hand-trimmed
/// config still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target of every entry. A leading `~` is expanded when the file is opened.
    pub log_file: String,
    /// Level name to shorthand flag. Ordered by level name, which is also
    /// the order flags are matched in.
    pub log_levels: BTreeMap<String, String>,
    /// Level used when the invocation carries no level flag.
    pub default_level: String,
    pub write_mode: WriteMode,
}

impl Default for Config {
    fn default() -> Self {
        let log_levels = [("debug", "d"), ("info", "i"), ("warn", "w"), ("error", "e")]
            .into_iter()
            .map(|(name, flag)| (name.to_string(), flag.to_string()))
            .collect();

        Self {
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_levels,
            default_level: DEFAULT_LEVEL.to_string(),
            write_mode: WriteMode::Append,
        }
    }
}

impl Config {
    /// Resolves a CLI token to a level name: `-<flag>` or `--<level>`.
    ///
    /// Levels are tried in name order and the first match wins, so two levels
    /// sharing a flag always resolve to the lexicographically smaller name.
    #[must_use]
    pub fn level_for_flag(&self, token: &str) -> Option<&str> {
        self.log_levels
            .iter()
            .find(|(name, flag)| {
                token.strip_prefix("--") == Some(name.as_str())
                    || token.strip_prefix('-') == Some(flag.as_str())
            })
            .map(|(name, _)| name.as_str())
    }

    /// The configured default level, or `info` when that is blank.
    #[must_use]
    pub fn effective_default_level(&self) -> &str {
        if self.default_level.is_empty() {
            DEFAULT_LEVEL
        } else {
            &self.default_level
        }
    }
}

/// A partial update for [`ConfigStore::save`](super::ConfigStore::save).
///
/// `None` and empty values both leave the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub log_file: Option<String>,
    pub log_levels: Option<BTreeMap<String, String>>,
    pub default_level: Option<String>,
    /// Kept as text so an invalid mode can be reported verbatim.
    pub write_mode: Option<String>,
}

impl ConfigUpdate {
    #[must_use]
    pub fn log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn log_levels(mut self, levels: BTreeMap<String, String>) -> Self {
        self.log_levels = Some(levels);
        self
    }

    #[must_use]
    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn write_mode(mut self, mode: impl Into<String>) -> Self {
        self.write_mode = Some(mode.into());
        self
    }

    /// True when no field carries a non-empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        non_empty(self.log_file.as_deref()).is_none()
            && self.log_levels.as_ref().is_none_or(BTreeMap::is_empty)
            && non_empty(self.default_level.as_deref()).is_none()
            && non_empty(self.write_mode.as_deref()).is_none()
    }
}

pub(super) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_mode_is_case_sensitive() {
        assert_eq!("prepend".parse::<WriteMode>(), Ok(WriteMode::Prepend));
        assert!("Append".parse::<WriteMode>().is_err());
    }

    #[test]
    fn flag_lookup_accepts_short_and_long_forms() {
        let config = Config::default();
        assert_eq!(config.level_for_flag("-w"), Some("warn"));
        assert_eq!(config.level_for_flag("--error"), Some("error"));
        assert_eq!(config.level_for_flag("--w"), None);
        assert_eq!(config.level_for_flag("-warn"), None);
        assert_eq!(config.level_for_flag("w"), None);
    }

    #[test]
    fn colliding_flags_resolve_to_first_level_name() {
        let mut config = Config::default();
        config.log_levels.insert("warning".to_string(), "w".to_string());
        config.log_levels.insert("alert".to_string(), "w".to_string());
        assert_eq!(config.level_for_flag("-w"), Some("alert"));
    }

    #[test]
    fn blank_default_level_falls_back_to_info() {
        let config = Config {
            default_level: String::new(),
            ..Config::default()
        };
        assert_eq!(config.effective_default_level(), "info");
    }

    #[test]
    fn empty_update_detection() {
        assert!(ConfigUpdate::default().is_empty());
        assert!(ConfigUpdate::default().log_file("").is_empty());
        assert!(ConfigUpdate::default().log_levels(BTreeMap::new()).is_empty());
        assert!(!ConfigUpdate::default().write_mode("x").is_empty());
    }
}
