//! Bot command extraction.

use crate::config::DEFAULT_COMMAND_MARKER;

/// A bot invocation such as `!give @bob 10`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// First word, marker included (`!give`).
    pub name: String,
    /// Remaining words, split on single spaces.
    pub args: Vec<String>,
}

impl Command {
    /// Extract a command from `text` using the default `!` marker.
    ///
    /// ```
    /// use twitch_line::Command;
    ///
    /// let cmd = Command::parse("!give @bob 10").unwrap();
    /// assert_eq!(cmd.name, "!give");
    /// assert_eq!(cmd.args, ["@bob", "10"]);
    ///
    /// assert!(Command::parse("hello").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Command> {
        Self::parse_with_marker(text, DEFAULT_COMMAND_MARKER)
    }

    /// Extract a command from `text` if it starts with `marker`.
    pub fn parse_with_marker(text: &str, marker: char) -> Option<Command> {
        if !text.starts_with(marker) {
            return None;
        }

        let mut words = text.split(' ');
        let name = words.next().unwrap_or_default().to_owned();
        let args = words.map(str::to_owned).collect();
        Some(Command { name, args })
    }

    /// Name without the leading marker.
    pub fn trigger(&self) -> &str {
        let mut chars = self.name.chars();
        chars.next();
        chars.as_str()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
