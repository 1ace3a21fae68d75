//! Decoder configuration.
//!
//! The defaults reproduce the behaviour existing bots depend on. Each knob
//! exists so a corrected variant can be exercised next to the legacy one.
//!
//! # Example
//!
//! ```
//! use twitch_line::{Decoder, DecoderConfig, OffsetUnit, TagErrorPolicy};
//!
//! let config = DecoderConfig {
//!     tag_error_policy: TagErrorPolicy::Skip,
//!     offset_unit: OffsetUnit::Utf16,
//!     ..DecoderConfig::default()
//! };
//! let decoder = Decoder::new(config);
//! let msg = decoder.decode("@a=1;bad;c=3 :nick!nick@host PRIVMSG #chan :hi");
//! assert_eq!(msg.tags.get("c").map(String::as_str), Some("3"));
//! ```

/// What the tag parser does when an entry has no `=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TagErrorPolicy {
    /// Abandon the remaining tag entries (legacy behaviour).
    #[default]
    Stop,
    /// Skip the malformed entry and keep going.
    Skip,
}

/// Unit in which `emotes` tag offsets are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OffsetUnit {
    /// Unicode scalar values (legacy behaviour).
    #[default]
    CodePoint,
    /// UTF-16 code units, as the chat service counts them on the wire.
    Utf16,
}

/// Configuration for a [`Decoder`](crate::Decoder).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderConfig {
    /// Handling of tag entries without a `=`.
    pub tag_error_policy: TagErrorPolicy,
    /// Unit of emote offsets.
    pub offset_unit: OffsetUnit,
    /// Username assigned to rewritten moderation events.
    pub system_username: String,
    /// Leading character that marks a bot command.
    pub command_marker: char,
}

/// Username the chat service uses for its own events.
pub const DEFAULT_SYSTEM_USERNAME: &str = "twitch";

/// Default bot command marker.
pub const DEFAULT_COMMAND_MARKER: char = '!';

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            tag_error_policy: TagErrorPolicy::default(),
            offset_unit: OffsetUnit::default(),
            system_username: DEFAULT_SYSTEM_USERNAME.to_string(),
            command_marker: DEFAULT_COMMAND_MARKER,
        }
    }
}
