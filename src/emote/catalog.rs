//! Post-decode emote enrichment.

use std::collections::HashMap;

use super::{Emote, EmoteSource};
use crate::message::Message;

/// A pass that runs on every decoded [`Message`] after native decoding.
///
/// Implementations may append to, filter, or replace `message.emotes`.
pub trait EmoteEnricher: Send + Sync {
    fn enrich(&self, message: &mut Message);
}

impl<F> EmoteEnricher for F
where
    F: Fn(&mut Message) + Send + Sync,
{
    fn enrich(&self, message: &mut Message) {
        self(message)
    }
}

/// In-memory third-party emote catalog, keyed by emote name.
///
/// Words of the message text that match a catalog name are appended as
/// emotes, once per distinct name, in order of first appearance.
///
/// ```
/// use twitch_line::{Decoder, EmoteCatalog};
///
/// let catalog = EmoteCatalog::global([("OMEGALUL", "5e3b0c")]);
/// let decoder = Decoder::default().with_enricher(catalog);
/// let msg = decoder.decode("@a=1 :bob!bob@bob PRIVMSG #c :OMEGALUL OMEGALUL");
/// assert_eq!(msg.emotes[0].name, "OMEGALUL");
/// assert_eq!(msg.emotes[0].count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EmoteCatalog {
    source: Option<EmoteSource>,
    channel: Option<String>,
    emotes: HashMap<String, String>,
}

impl EmoteCatalog {
    /// Catalog applied to messages from every channel.
    pub fn global<I, K, V>(emotes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            source: Some(EmoteSource::ThirdPartyGlobal),
            channel: None,
            emotes: collect(emotes),
        }
    }

    /// Catalog applied only to messages from `channel` (bare name).
    pub fn channel<I, K, V>(channel: impl Into<String>, emotes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            source: Some(EmoteSource::ThirdPartyChannel),
            channel: Some(channel.into()),
            emotes: collect(emotes),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.emotes.insert(name.into(), id.into());
    }

    pub fn len(&self) -> usize {
        self.emotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotes.is_empty()
    }

    fn applies_to(&self, message: &Message) -> bool {
        match &self.channel {
            Some(channel) => message.channel.name() == channel,
            None => true,
        }
    }
}

fn collect<I, K, V>(emotes: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    emotes
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl EmoteEnricher for EmoteCatalog {
    fn enrich(&self, message: &mut Message) {
        if self.emotes.is_empty() || !self.applies_to(message) {
            return;
        }
        let source = self.source.unwrap_or(EmoteSource::ThirdPartyGlobal);

        let mut found: Vec<Emote> = Vec::new();
        for word in message.text.split(' ') {
            let Some(id) = self.emotes.get(word) else {
                continue;
            };
            match found.iter_mut().find(|e| e.name == word) {
                Some(emote) => emote.count += 1,
                None => found.push(Emote {
                    source,
                    id: id.clone(),
                    name: word.to_owned(),
                    count: 1,
                }),
            }
        }
        message.emotes.extend(found);
    }
}
