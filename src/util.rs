//! Offset slicing and lenient number helpers.
//!
//! The chat service describes emote positions as inclusive `start-end`
//! ranges. These helpers turn such ranges into string slices without ever
//! panicking, whichever unit the offsets are counted in.

use crate::config::OffsetUnit;

/// Parses a signed integer, yielding `0` when the input is not a number.
///
/// Accepts an optional leading `+` or `-`, like the chat service does.
///
/// # Examples
///
/// ```
/// use twitch_line::util::parse_int_or_zero;
///
/// assert_eq!(parse_int_or_zero("12"), 12);
/// assert_eq!(parse_int_or_zero("-3"), -3);
/// assert_eq!(parse_int_or_zero("abc"), 0);
/// assert_eq!(parse_int_or_zero(""), 0);
/// ```
#[inline]
pub fn parse_int_or_zero(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}

/// Parses an offset, yielding `0` when the input is not a non-negative number.
#[inline]
pub(crate) fn parse_offset_or_zero(s: &str) -> usize {
    s.parse().unwrap_or(0)
}

/// Returns the inclusive code point range `start..=end` of `s`.
///
/// Offsets past the end are clamped; an inverted range yields `""`.
///
/// # Examples
///
/// ```
/// use twitch_line::util::slice_chars;
///
/// assert_eq!(slice_chars("Hello Kappa", 6, 10), "Kappa");
/// assert_eq!(slice_chars("héllo", 0, 1), "hé");
/// assert_eq!(slice_chars("short", 3, 100), "rt");
/// assert_eq!(slice_chars("short", 4, 2), "");
/// ```
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    if end < start {
        return "";
    }
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx);
    let from = byte_at(start);
    let to = byte_at(end.saturating_add(1));
    &s[from..to]
}

/// Returns the inclusive UTF-16 code unit range `start..=end` of `s`.
///
/// Offsets past the end are clamped. A range splitting a surrogate pair
/// yields the replacement character for the lone half.
///
/// # Examples
///
/// ```
/// use twitch_line::util::slice_utf16;
///
/// // 👋 occupies two UTF-16 code units.
/// assert_eq!(slice_utf16("👋 Kappa", 3, 7), "Kappa");
/// ```
pub fn slice_utf16(s: &str, start: usize, end: usize) -> String {
    if end < start {
        return String::new();
    }
    let units: Vec<u16> = s.encode_utf16().collect();
    let from = start.min(units.len());
    let to = end.saturating_add(1).min(units.len());
    String::from_utf16_lossy(&units[from..to])
}

/// Slices `s` by an inclusive range counted in `unit`.
pub(crate) fn slice_offsets(s: &str, start: usize, end: usize, unit: OffsetUnit) -> String {
    match unit {
        OffsetUnit::CodePoint => slice_chars(s, start, end).to_owned(),
        OffsetUnit::Utf16 => slice_utf16(s, start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_or_zero() {
        assert_eq!(parse_int_or_zero("60"), 60);
        assert_eq!(parse_int_or_zero("+7"), 7);
        assert_eq!(parse_int_or_zero("-1"), -1);
        assert_eq!(parse_int_or_zero("1.5"), 0);
        assert_eq!(parse_int_or_zero(" 1"), 0);
    }

    #[test]
    fn test_parse_offset_or_zero() {
        assert_eq!(parse_offset_or_zero("10"), 10);
        assert_eq!(parse_offset_or_zero("-1"), 0);
        assert_eq!(parse_offset_or_zero("x"), 0);
    }

    #[test]
    fn test_slice_chars_multibyte() {
        assert_eq!(slice_chars("日本語テスト", 1, 2), "本語");
        assert_eq!(slice_chars("👋🌍🚀", 1, 1), "🌍");
    }

    #[test]
    fn test_slice_chars_out_of_range() {
        assert_eq!(slice_chars("abc", 5, 9), "");
        assert_eq!(slice_chars("abc", 0, usize::MAX), "abc");
        assert_eq!(slice_chars("", 0, 0), "");
    }

    #[test]
    fn test_slice_utf16_vs_chars_with_astral_text() {
        let text = "🚀 Kappa";
        // Code points: 🚀 is one unit, so Kappa starts at 2.
        assert_eq!(slice_chars(text, 2, 6), "Kappa");
        // UTF-16: 🚀 is a surrogate pair, so Kappa starts at 3.
        assert_eq!(slice_utf16(text, 3, 7), "Kappa");
        assert_eq!(slice_utf16(text, 2, 6), " Kapp");
    }

    #[test]
    fn test_slice_utf16_split_surrogate() {
        assert_eq!(slice_utf16("🚀", 0, 0), "\u{FFFD}");
        assert_eq!(slice_utf16("abc", 4, 2), "");
        assert_eq!(slice_utf16("abc", 1, 99), "bc");
    }

    #[test]
    fn test_slice_offsets_dispatch() {
        assert_eq!(slice_offsets("🚀 Kappa", 2, 6, OffsetUnit::CodePoint), "Kappa");
        assert_eq!(slice_offsets("🚀 Kappa", 3, 7, OffsetUnit::Utf16), "Kappa");
    }
}
