//! Emote references inside message text.
//!
//! Native emotes come from the `emotes` tag. Third-party emotes are added
//! afterwards by [`EmoteEnricher`]s registered on the
//! [`Decoder`](crate::Decoder).

mod catalog;
mod native;

pub use self::catalog::{EmoteCatalog, EmoteEnricher};
pub use self::native::{parse_emote_entry, parse_native_emotes};

use std::fmt;

/// Where an emote was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmoteSource {
    /// The chat service's own `emotes` tag.
    Native,
    /// A third-party catalog shared by every channel.
    ThirdPartyGlobal,
    /// A third-party catalog for a single channel.
    ThirdPartyChannel,
}

impl fmt::Display for EmoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmoteSource::Native => "native",
            EmoteSource::ThirdPartyGlobal => "third-party-global",
            EmoteSource::ThirdPartyChannel => "third-party-channel",
        })
    }
}

/// One emote referenced by a message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emote {
    pub source: EmoteSource,
    /// Identifier in the emote's catalog.
    pub id: String,
    /// Text the emote replaces, as it appears in the message.
    pub name: String,
    /// How many times the emote occurs in the message.
    pub count: usize,
}
