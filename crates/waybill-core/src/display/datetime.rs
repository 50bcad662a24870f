//! Timestamp formatting for deadline and completion output.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Renders a stored UTC timestamp in the system timezone.
///
/// Deadlines and completions are tracked to the minute (the delay dead
/// zone is a minute wide), so the rendered form stops at minutes too:
/// `YYYY-MM-DD HH:MM TZ`, 24-hour clock, zero-padded, with the timezone
/// abbreviation (UTC, IST, ...).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
