//! Tag block decoding.
//!
//! A tag block is `key=value` entries joined by `;`, with `;`, space and
//! backslash in values escaped as `\:`, `\s` and `\\`.

use tracing::trace;

use super::badges::parse_badges;
use super::types::Message;
use crate::config::{OffsetUnit, TagErrorPolicy};
use crate::emote::parse_native_emotes;
use crate::error::{ParseError, Result};

/// Tag holding the sender's badges.
pub const BADGES: &str = "badges";
/// Tag holding the sender's name color.
pub const COLOR: &str = "color";
/// Tag holding the sender's display name.
pub const DISPLAY_NAME: &str = "display-name";
/// Tag holding native emote positions.
pub const EMOTES: &str = "emotes";
/// Tag holding the sender's user type.
pub const USER_TYPE: &str = "user-type";
/// Timeout length in seconds on `CLEARCHAT`.
pub const BAN_DURATION: &str = "ban-duration";
/// Timeout reason on `CLEARCHAT`.
pub const BAN_REASON: &str = "ban-reason";

/// Unescape a tag value from wire format in a single left-to-right pass.
///
/// Only `\:`, `\s` and `\\` are escapes. Any other backslash, including a
/// trailing one, is kept as-is.
///
/// ```
/// use twitch_line::message::tags::unescape_tag_value;
///
/// assert_eq!(unescape_tag_value("foo\\sbar"), "foo bar");
/// assert_eq!(unescape_tag_value("a\\:b\\sc\\\\d"), "a;b c\\d");
/// ```
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars().peekable();
    while let Some(c) = iter.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match iter.peek() {
            Some(':') => unescaped.push(';'),
            Some('s') => unescaped.push(' '),
            Some('\\') => unescaped.push('\\'),
            _ => {
                unescaped.push('\\');
                continue;
            }
        }
        iter.next();
    }
    unescaped
}

/// Split one tag entry at its first `=`.
///
/// ```
/// use twitch_line::message::tags::split_tag;
///
/// assert_eq!(split_tag("room-id=1=2").unwrap(), ("room-id", "1=2"));
/// assert!(split_tag("flag").is_err());
/// ```
pub fn split_tag(entry: &str) -> Result<(&str, &str)> {
    entry
        .split_once('=')
        .ok_or_else(|| ParseError::MalformedTag(entry.to_owned()))
}

/// Decode `raw` into `msg`, routing known keys to their fields.
///
/// Emote positions are resolved against `msg.text`, so the text must be final
/// before this runs.
pub(crate) fn apply_tags(
    msg: &mut Message,
    raw: &str,
    policy: TagErrorPolicy,
    offset_unit: OffsetUnit,
) {
    for entry in raw.split(';') {
        let (key, value) = match split_tag(entry) {
            Ok(kv) => kv,
            Err(e) => match policy {
                TagErrorPolicy::Stop => {
                    trace!(error = %e, "abandoning tag block");
                    return;
                }
                TagErrorPolicy::Skip => {
                    trace!(error = %e, "skipping tag");
                    continue;
                }
            },
        };

        let value = unescape_tag_value(value);
        match key {
            BADGES => msg.badges = parse_badges(&value),
            COLOR => msg.color = value,
            DISPLAY_NAME => msg.display_name = value,
            EMOTES => msg.emotes = parse_native_emotes(&value, &msg.text, offset_unit),
            USER_TYPE => msg.user_type = value,
            _ => {
                msg.tags.insert(key.to_owned(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str, policy: TagErrorPolicy) -> Message {
        let mut msg = Message::raw("Hello Kappa");
        apply_tags(&mut msg, raw, policy, OffsetUnit::CodePoint);
        msg
    }

    #[test]
    fn test_unescape_semicolon() {
        assert_eq!(unescape_tag_value("a\\:b"), "a;b");
    }

    #[test]
    fn test_unescape_space() {
        assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
    }

    #[test]
    fn test_unescape_backslash() {
        assert_eq!(unescape_tag_value("path\\\\file"), "path\\file");
    }

    #[test]
    fn test_unescape_is_single_pass() {
        // `\\s` is an escaped backslash followed by a literal `s`.
        assert_eq!(unescape_tag_value("\\\\s"), "\\s");
        assert_eq!(unescape_tag_value("\\\\:"), "\\:");
    }

    #[test]
    fn test_unescape_keeps_unknown_sequences() {
        assert_eq!(unescape_tag_value("a\\nb"), "a\\nb");
        assert_eq!(unescape_tag_value("test\\"), "test\\");
    }

    #[test]
    fn test_routing() {
        let msg = decode(
            "badges=moderator/1;color=#1E90FF;display-name=Ronni;emotes=25:6-10;user-type=mod;room-id=1337",
            TagErrorPolicy::Stop,
        );
        assert_eq!(msg.badge("moderator"), Some(1));
        assert_eq!(msg.color, "#1E90FF");
        assert_eq!(msg.display_name, "Ronni");
        assert_eq!(msg.emotes.len(), 1);
        assert_eq!(msg.emotes[0].name, "Kappa");
        assert_eq!(msg.user_type, "mod");
        assert_eq!(msg.tag("room-id"), Some("1337"));
        assert_eq!(msg.tags.len(), 1);
    }

    #[test]
    fn test_generic_values_are_unescaped() {
        let msg = decode("system-msg=5\\sraiders\\sfrom\\sx", TagErrorPolicy::Stop);
        assert_eq!(msg.tag("system-msg"), Some("5 raiders from x"));
    }

    #[test]
    fn test_stop_policy_truncates() {
        let msg = decode("a=1;bad;c=3", TagErrorPolicy::Stop);
        assert_eq!(msg.tag("a"), Some("1"));
        assert_eq!(msg.tag("c"), None);
    }

    #[test]
    fn test_skip_policy_continues() {
        let msg = decode("a=1;bad;c=3", TagErrorPolicy::Skip);
        assert_eq!(msg.tag("a"), Some("1"));
        assert_eq!(msg.tag("c"), Some("3"));
        assert!(!msg.tags.contains_key("bad"));
    }

    #[test]
    fn test_empty_block() {
        let msg = decode("", TagErrorPolicy::Stop);
        assert!(msg.tags.is_empty());
    }

    #[test]
    fn test_empty_value() {
        let msg = decode("emote-only=", TagErrorPolicy::Stop);
        assert_eq!(msg.tag("emote-only"), Some(""));
    }
}
