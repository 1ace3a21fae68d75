use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::chan::Channel;
use crate::command::Command;
use crate::emote::Emote;

/// Kind of event a chat line carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    /// A chat message (`PRIVMSG`).
    Privmsg,
    /// A timeout or ban (`CLEARCHAT`).
    ClearChat,
    /// Any other keyword.
    Unclassified,
}

impl Category {
    /// Maps a protocol keyword to its category.
    ///
    /// ```
    /// use twitch_line::Category;
    ///
    /// assert_eq!(Category::from_keyword("PRIVMSG"), Category::Privmsg);
    /// assert_eq!(Category::from_keyword("CLEARCHAT"), Category::ClearChat);
    /// assert_eq!(Category::from_keyword("USERNOTICE"), Category::Unclassified);
    /// ```
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "PRIVMSG" => Category::Privmsg,
            "CLEARCHAT" => Category::ClearChat,
            _ => Category::Unclassified,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Privmsg => "PRIVMSG",
            Category::ClearChat => "CLEARCHAT",
            Category::Unclassified => "UNCLASSIFIED",
        })
    }
}

/// A decoded chat line.
///
/// Lines without a recognizable envelope decode to a message holding only
/// `text`; every other field keeps its empty value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Message {
    /// Event kind, `None` when the line had no envelope or no keyword.
    pub category: Option<Category>,
    /// When the line was decoded (not when it was sent).
    pub timestamp: Option<DateTime<Utc>>,
    pub channel: Channel,
    pub username: String,
    pub display_name: String,
    pub user_type: String,
    pub color: String,
    /// Badge name to version, e.g. `subscriber` → `12`.
    pub badges: HashMap<String, i64>,
    /// Native emotes first, then anything appended by enrichers.
    pub emotes: Vec<Emote>,
    /// Tags without a dedicated field, values unescaped.
    pub tags: HashMap<String, String>,
    pub text: String,
    /// Set when the text was wrapped in `\x01ACTION ...\x01` (a `/me`).
    pub is_action: bool,
    pub command: Option<Command>,
}

impl Message {
    /// Message holding only the raw line, for input without an envelope.
    pub fn raw(line: impl Into<String>) -> Self {
        Self {
            text: line.into(),
            ..Self::default()
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn badge(&self, name: &str) -> Option<i64> {
        self.badges.get(name).copied()
    }

    pub fn is_command(&self) -> bool {
        self.command.is_some()
    }

    /// Display name when the sender set one, username otherwise.
    pub fn author(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    pub fn is_moderator(&self) -> bool {
        self.badges.contains_key("moderator") || self.badges.contains_key("broadcaster")
    }
}
