//! `emotes` tag decoding.
//!
//! The tag lists one entry per emote id, joined by `/`:
//! ```text
//! 25:0-4,12-16/1902:6-10
//! ```
//! Each entry holds the id, a `:`, and comma-separated inclusive
//! `start-end` ranges into the message text.

use tracing::trace;

use super::{Emote, EmoteSource};
use crate::config::OffsetUnit;
use crate::error::{ParseError, Result};
use crate::util::{parse_offset_or_zero, slice_offsets};

/// Parse a single `id:start-end,...` entry against `text`.
///
/// The name comes from the first range. Unparsable offsets count as `0`,
/// and ranges past the end of `text` are clamped.
pub fn parse_emote_entry(entry: &str, text: &str, unit: OffsetUnit) -> Result<Emote> {
    let (id, positions) = entry
        .split_once(':')
        .ok_or_else(|| ParseError::MalformedEmote(entry.to_owned()))?;

    let mut ranges = positions.split(',').filter(|r| !r.is_empty());
    let first = ranges
        .next()
        .ok_or_else(|| ParseError::MalformedEmote(entry.to_owned()))?;

    let (start, end) = first.split_once('-').unwrap_or((first, ""));
    let (start, end) = (parse_offset_or_zero(start), parse_offset_or_zero(end));

    Ok(Emote {
        source: EmoteSource::Native,
        id: id.to_owned(),
        name: slice_offsets(text, start, end, unit),
        count: 1 + ranges.count(),
    })
}

/// Parse an `emotes` tag value, resolving each entry's name in `text`.
///
/// Malformed entries are skipped.
///
/// ```
/// use twitch_line::OffsetUnit;
/// use twitch_line::emote::parse_native_emotes;
///
/// let emotes = parse_native_emotes("25:6-10", "Hello Kappa", OffsetUnit::CodePoint);
/// assert_eq!(emotes[0].id, "25");
/// assert_eq!(emotes[0].name, "Kappa");
/// ```
pub fn parse_native_emotes(value: &str, text: &str, unit: OffsetUnit) -> Vec<Emote> {
    if value.is_empty() {
        return Vec::new();
    }

    value
        .split('/')
        .filter_map(|entry| match parse_emote_entry(entry, text, unit) {
            Ok(emote) => Some(emote),
            Err(e) => {
                trace!(error = %e, "skipping emote");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emotes(value: &str, text: &str) -> Vec<Emote> {
        parse_native_emotes(value, text, OffsetUnit::CodePoint)
    }

    #[test]
    fn test_single_emote() {
        let e = emotes("25:6-10", "Hello Kappa");
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].name, "Kappa");
        assert_eq!(e[0].id, "25");
        assert_eq!(e[0].source, EmoteSource::Native);
        assert_eq!(e[0].count, 1);
    }

    #[test]
    fn test_multiple_ids_and_occurrences() {
        let text = "Kappa Keepo Kappa";
        let e = emotes("25:0-4,12-16/1902:6-10", text);
        assert_eq!(e.len(), 2);
        assert_eq!((e[0].id.as_str(), e[0].name.as_str(), e[0].count), ("25", "Kappa", 2));
        assert_eq!((e[1].id.as_str(), e[1].name.as_str(), e[1].count), ("1902", "Keepo", 1));
    }

    #[test]
    fn test_count_ignores_dashes_in_id() {
        let e = emotes("emotesv2_a-b-c:0-4", "Kappa");
        assert_eq!(e[0].id, "emotesv2_a-b-c");
        assert_eq!(e[0].count, 1);
    }

    #[test]
    fn test_offsets_are_code_points() {
        let e = emotes("25:2-6", "é Kappa");
        assert_eq!(e[0].name, "Kappa");
    }

    #[test]
    fn test_utf16_offsets() {
        let e = parse_native_emotes("25:3-7", "🚀 Kappa", OffsetUnit::Utf16);
        assert_eq!(e[0].name, "Kappa");
        let legacy = parse_native_emotes("25:3-7", "🚀 Kappa", OffsetUnit::CodePoint);
        assert_eq!(legacy[0].name, "appa");
    }

    #[test]
    fn test_empty_value() {
        assert!(emotes("", "Kappa").is_empty());
    }

    #[test]
    fn test_malformed_numbers_are_zero() {
        let e = emotes("25:x-y", "Kappa");
        assert_eq!(e[0].name, "K");
        let e = emotes("25:3", "Kappa");
        assert_eq!(e[0].name, "");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let e = emotes("25:6-40", "Hello Kap");
        assert_eq!(e[0].name, "Kap");
        let e = emotes("25:50-60", "short");
        assert_eq!(e[0].name, "");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        assert!(emotes("25", "Kappa").is_empty());
        assert!(emotes("25:", "Kappa").is_empty());
        let e = emotes("25/1902:0-4", "Keepo");
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].id, "1902");
    }

    #[test]
    fn test_entry_error() {
        assert_eq!(
            parse_emote_entry("25", "Kappa", OffsetUnit::CodePoint),
            Err(ParseError::MalformedEmote("25".to_string()))
        );
    }
}
