//! Chat room identity.

use std::fmt;

/// A chat room, identified by its bare name (without the leading `#`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    name: String,
}

impl Channel {
    /// Creates a channel from its bare name.
    ///
    /// ```
    /// use twitch_line::Channel;
    ///
    /// let chan = Channel::new("forsen");
    /// assert_eq!(chan.name(), "forsen");
    /// assert_eq!(chan.to_string(), "#forsen");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the placeholder channel of lines without a target.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name)
    }
}
