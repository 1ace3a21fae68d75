//! Rewriting of moderation events into readable text.

use tracing::debug;

use crate::message::tags::{BAN_DURATION, BAN_REASON};
use crate::message::Message;
use crate::util::parse_int_or_zero;

/// Format a number of seconds in compact `1h2m3s` form.
///
/// Leading zero units are omitted, inner ones are kept, and zero is `0s`.
///
/// ```
/// use twitch_line::moderation::format_duration;
///
/// assert_eq!(format_duration(0), "0s");
/// assert_eq!(format_duration(30), "30s");
/// assert_eq!(format_duration(60), "1m0s");
/// assert_eq!(format_duration(90), "1m30s");
/// assert_eq!(format_duration(3600), "1h0m0s");
/// ```
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, secs)
    } else {
        format!("{}{}s", sign, secs)
    }
}

/// Turn a `CLEARCHAT` message into `"<target> was timed out for <duration>: <reason>"`.
///
/// The sender becomes `system_username`; the text it replaces names the target.
pub(crate) fn rewrite_clear_chat(msg: &mut Message, system_username: &str) {
    let target = std::mem::take(&mut msg.text);
    let seconds = msg.tag(BAN_DURATION).map_or(0, parse_int_or_zero);
    let reason = msg.tag(BAN_REASON).unwrap_or_default();

    let text = format!(
        "{} was timed out for {}: {}",
        target,
        format_duration(seconds),
        reason
    );
    msg.text = text;
    msg.username = system_username.to_owned();

    debug!(target_user = %target, seconds, channel = %msg.channel, "rewrote timeout");
}
