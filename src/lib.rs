//! # twitch-line
//!
//! A forgiving decoder for the tag-augmented IRC lines spoken by Twitch chat.
//!
//! ## Features
//!
//! - Envelope splitting of `@tags :source COMMAND #channel :text` lines
//! - Tag unescaping, badge maps and native emote positions
//! - `/me` action detection
//! - Timeout events (`CLEARCHAT`) rewritten into readable text
//! - Bot command extraction (`!command arg ...`)
//! - Pluggable third-party emote enrichment
//!
//! Decoding never fails. Lines that do not carry an envelope come back as
//! a [`Message`] holding only their text, and malformed fields fall back to
//! empty values. Every fallback is reported through `tracing` at `trace` level.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use twitch_line::{Category, Decoder, EmoteCatalog};
//!
//! let decoder = Decoder::default()
//!     .with_enricher(EmoteCatalog::global([("OMEGALUL", "583089f4737a8e61abb0186b")]));
//!
//! let raw = "@badges=subscriber/12;color=#FF4500;display-name=Ronni;emotes=25:0-4 \
//!            :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa OMEGALUL";
//! let msg = decoder.decode(raw);
//!
//! assert_eq!(msg.category, Some(Category::Privmsg));
//! assert_eq!(msg.author(), "Ronni");
//! assert_eq!(msg.emotes.len(), 2);
//! ```

pub mod chan;
pub mod command;
pub mod config;
pub mod emote;
pub mod error;
pub mod message;
pub mod moderation;
pub mod util;

pub use self::chan::Channel;
pub use self::command::Command;
pub use self::config::{DecoderConfig, OffsetUnit, TagErrorPolicy};
pub use self::emote::{Emote, EmoteCatalog, EmoteEnricher, EmoteSource};
pub use self::error::ParseError;
pub use self::message::{Category, Decoder, Message};
