//! Error types for the line decoder.
//!
//! Public decoding never fails: [`Decoder::decode`](crate::Decoder::decode)
//! always returns a [`Message`](crate::Message). These errors are produced by
//! the strict per-field parsers and mapped to safe defaults by the lenient
//! pipeline, which traces them before moving on.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors encountered while splitting or decoding a chat line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Line does not start with the `@` tag marker.
    #[error("missing tag marker")]
    MissingTagMarker,

    /// Line could not be split into tags, middle and text.
    #[error("malformed envelope at position {position}: {context}")]
    MalformedEnvelope {
        /// Byte position in the line where splitting stopped.
        position: usize,
        /// Description of the segment being parsed.
        context: &'static str,
    },

    /// Tag entry without a `=` separator.
    #[error("malformed tag: {0:?}")]
    MalformedTag(String),

    /// Badge entry without a `/` separator.
    #[error("malformed badge: {0:?}")]
    MalformedBadge(String),

    /// Emote entry without an id or position list.
    #[error("malformed emote: {0:?}")]
    MalformedEmote(String),
}
