//! Sender, keyword and target recovery from the middle block.

use super::types::Category;

/// Fields recovered from a middle block such as
/// `nick!nick@nick.tmi.twitch.tv PRIVMSG #channel`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Middle<'a> {
    pub username: Option<&'a str>,
    pub category: Option<Category>,
    pub channel: Option<&'a str>,
}

/// Scans the middle block once.
///
/// The username is everything before the first `!` of the source token, the
/// keyword is the second space-delimited token, and the channel is whatever
/// follows the last `#`. A missing marker leaves its field `None`.
pub(crate) fn parse_middle(middle: &str) -> Middle<'_> {
    let mut out = Middle::default();
    let mut sender_found = false;
    let mut spaces = 0usize;
    let mut keyword_start = None;

    for (i, c) in middle.char_indices() {
        match c {
            '!' if !sender_found && spaces == 0 => {
                out.username = Some(&middle[..i]);
                sender_found = true;
            }
            ' ' => {
                spaces += 1;
                match (spaces, keyword_start) {
                    (1, _) => keyword_start = Some(i + 1),
                    (2, Some(start)) => {
                        out.category = Some(Category::from_keyword(&middle[start..i]));
                    }
                    _ => {}
                }
            }
            // Later markers overwrite earlier ones.
            '#' => out.channel = Some(&middle[i + 1..]),
            _ => {}
        }
    }

    // A lone trailing keyword only counts after a source token.
    if spaces == 1 {
        if let Some(start) = keyword_start {
            if is_source(&middle[..start - 1]) {
                out.category = Some(Category::from_keyword(&middle[start..]));
            }
        }
    }

    out
}

/// A source is a server name (`tmi.twitch.tv`) or a `nick!user@host` mask.
fn is_source(token: &str) -> bool {
    token.contains(['.', '!'])
}
