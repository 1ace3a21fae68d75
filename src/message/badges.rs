//! `badges` tag decoding.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{ParseError, Result};
use crate::util::parse_int_or_zero;

/// Parse a single `name/version` badge.
///
/// A non-numeric version is `0`.
pub fn parse_badge(entry: &str) -> Result<(&str, i64)> {
    let (name, version) = entry
        .split_once('/')
        .ok_or_else(|| ParseError::MalformedBadge(entry.to_owned()))?;
    Ok((name, parse_int_or_zero(version)))
}

/// Parse a `badges` tag value into a name to version map.
///
/// Entries without a `/` are skipped; later duplicates win.
///
/// ```
/// use twitch_line::message::badges::parse_badges;
///
/// let badges = parse_badges("moderator/1,subscriber/12,broken");
/// assert_eq!(badges.len(), 2);
/// assert_eq!(badges["subscriber"], 12);
/// ```
pub fn parse_badges(value: &str) -> HashMap<String, i64> {
    let mut badges = HashMap::new();
    for entry in value.split(',') {
        match parse_badge(entry) {
            Ok((name, version)) => {
                badges.insert(name.to_owned(), version);
            }
            Err(e) => trace!(error = %e, "skipping badge"),
        }
    }
    badges
}
