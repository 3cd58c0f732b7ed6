//! The `name:flag,name:flag` grammar used by `config --levels`.

use std::collections::BTreeMap;

/// Parses comma-separated `name:flag` pairs, trimming whitespace around
/// each pair and each side of the colon. Pairs that do not split into
/// exactly two parts are dropped without error.
#[must_use]
pub fn parse_levels(input: &str) -> BTreeMap<String, String> {
    input
        .split(',')
        .filter_map(|pair| {
            let mut parts = pair.trim().split(':');
            let (Some(name), Some(flag), None) = (parts.next(), parts.next(), parts.next()) else {
                return None;
            };
            Some((name.trim().to_string(), flag.trim().to_string()))
        })
        .collect()
}

/// Inverse of [`parse_levels`] for display, in level-name order.
#[must_use]
pub fn format_levels(levels: &BTreeMap<String, String>) -> String {
    levels
        .iter()
        .map(|(name, flag)| format!("{name}:{flag}"))
        .collect::<Vec<_>>()
        .join(", ")
}
