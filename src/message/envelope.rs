//! Nom-based envelope splitter.
//!
//! A tagged chat line has the shape:
//! ```text
//! @<tags> :<middle> :<text>
//! ```
//! where `<text>` may itself contain ` :`. Only the first two separators
//! delimit segments.

use nom::{
    bytes::complete::{tag, take_until},
    character::complete::char,
    combinator::rest,
    error::{context, VerboseError, VerboseErrorKind},
    sequence::preceded,
    IResult,
};

use crate::error::ParseError;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Separator that opens the middle block and the trailing text.
const SEGMENT_SEPARATOR: &str = " :";

/// Wire marker of a `/me` action.
const ACTION_PREFIX: &str = "\u{1}ACTION";

/// Terminator of a `/me` action.
const ACTION_TERMINATOR: char = '\u{1}';

fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing tag block",
        preceded(char('@'), take_until(SEGMENT_SEPARATOR)),
    )(input)
}

fn parse_middle(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing middle block",
        preceded(tag(SEGMENT_SEPARATOR), take_until(SEGMENT_SEPARATOR)),
    )(input)
}

fn parse_text(input: &str) -> ParseResult<&str, &str> {
    context("parsing trailing text", preceded(tag(SEGMENT_SEPARATOR), rest))(input)
}

/// The three segments of a tagged line, borrowed from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// Tag block without the leading `@`.
    pub tags: &'a str,
    /// Sender, keyword and target.
    pub middle: &'a str,
    /// Trailing text with any action wrapper removed.
    pub text: &'a str,
    /// Whether an action wrapper was removed from `text`.
    pub is_action: bool,
}

impl<'a> Envelope<'a> {
    /// Splits a line into its envelope segments.
    ///
    /// ```
    /// use twitch_line::message::Envelope;
    ///
    /// let env = Envelope::parse("@color=#FF0000 :bob!bob@bob.tmi PRIVMSG #chan :hi :)").unwrap();
    /// assert_eq!(env.tags, "color=#FF0000");
    /// assert_eq!(env.middle, "bob!bob@bob.tmi PRIVMSG #chan");
    /// assert_eq!(env.text, "hi :)");
    /// ```
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        if !line.starts_with('@') {
            return Err(ParseError::MissingTagMarker);
        }

        let segments = |input: &'a str| -> ParseResult<&'a str, (&'a str, &'a str, &'a str)> {
            let (input, tags) = parse_tags(input)?;
            let (input, middle) = parse_middle(input)?;
            let (input, text) = parse_text(input)?;
            Ok((input, (tags, middle, text)))
        };

        match segments(line) {
            Ok((_, (tags, middle, text))) => {
                let (text, is_action) = strip_action(text);
                Ok(Envelope {
                    tags,
                    middle,
                    text,
                    is_action,
                })
            }
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let position = e
                    .errors
                    .first()
                    .map_or(line.len(), |(input, _)| line.len() - input.len());
                let context = e
                    .errors
                    .iter()
                    .find_map(|(_, kind)| match kind {
                        VerboseErrorKind::Context(ctx) => Some(*ctx),
                        _ => None,
                    })
                    .unwrap_or("splitting envelope");
                Err(ParseError::MalformedEnvelope { position, context })
            }
            Err(nom::Err::Incomplete(_)) => Err(ParseError::MalformedEnvelope {
                position: line.len(),
                context: "incomplete input",
            }),
        }
    }
}

/// Removes the `\x01ACTION ` prefix and the closing `\x01`, if present.
fn strip_action(text: &str) -> (&str, bool) {
    match text.strip_prefix(ACTION_PREFIX) {
        Some(body) => {
            let body = body.strip_prefix(' ').unwrap_or(body);
            let body = body.strip_suffix(ACTION_TERMINATOR).unwrap_or(body);
            (body, true)
        }
        None => (text, false),
    }
}
