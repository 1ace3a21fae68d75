use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use tracing::trace;

use super::envelope::Envelope;
use super::middle::parse_middle;
use super::tags::apply_tags;
use super::types::{Category, Message};
use crate::chan::Channel;
use crate::command::Command;
use crate::config::DecoderConfig;
use crate::emote::EmoteEnricher;
use crate::moderation::rewrite_clear_chat;

/// Turns raw chat lines into [`Message`]s.
///
/// Decoding never fails: input without a recognizable envelope comes back
/// as a message carrying only its text.
///
/// ```
/// use twitch_line::{Category, Decoder};
///
/// let decoder = Decoder::default();
/// let msg = decoder.decode(
///     "@badges=moderator/1;display-name=Bob :bob!bob@bob.tmi.twitch.tv PRIVMSG #dallas :!give @alice 10",
/// );
/// assert_eq!(msg.category, Some(Category::Privmsg));
/// assert_eq!(msg.username, "bob");
/// assert_eq!(msg.channel.name(), "dallas");
/// assert_eq!(msg.badge("moderator"), Some(1));
/// assert_eq!(msg.command.unwrap().args, ["@alice", "10"]);
/// ```
#[derive(Default)]
pub struct Decoder {
    config: DecoderConfig,
    enrichers: Vec<Box<dyn EmoteEnricher>>,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            enrichers: Vec::new(),
        }
    }

    /// Register a pass that runs on every enveloped message after decoding.
    ///
    /// Enrichers run in registration order.
    pub fn with_enricher(mut self, enricher: impl EmoteEnricher + 'static) -> Self {
        self.enrichers.push(Box::new(enricher));
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one line.
    pub fn decode(&self, line: &str) -> Message {
        let envelope = match Envelope::parse(line) {
            Ok(envelope) => envelope,
            Err(e) => {
                trace!(error = %e, "line has no envelope");
                return Message::raw(line);
            }
        };

        let mut msg = Message {
            timestamp: Some(Utc::now()),
            text: envelope.text.to_owned(),
            is_action: envelope.is_action,
            ..Message::default()
        };

        let middle = parse_middle(envelope.middle);
        if let Some(username) = middle.username {
            msg.username = username.to_owned();
        }
        if let Some(channel) = middle.channel {
            msg.channel = Channel::new(channel);
        }
        msg.category = middle.category;

        apply_tags(
            &mut msg,
            envelope.tags,
            self.config.tag_error_policy,
            self.config.offset_unit,
        );

        if msg.category == Some(Category::ClearChat) {
            rewrite_clear_chat(&mut msg, &self.config.system_username);
        }

        msg.command = Command::parse_with_marker(&msg.text, self.config.command_marker);

        for enricher in &self.enrichers {
            enricher.enrich(&mut msg);
        }

        msg
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("config", &self.config)
            .field("enrichers", &self.enrichers.len())
            .finish()
    }
}

impl FromStr for Message {
    type Err = Infallible;

    /// Decode with the default configuration and no enrichers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Decoder::default().decode(s))
    }
}
