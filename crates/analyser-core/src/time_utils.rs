use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::error::{AnalyserError, Result};

/// Strict 24-hour time-of-day format used by the log.
pub const TIME_FORMAT: &str = "%H:%M:%S";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse an `HH:MM:SS` time of day.
///
/// There is no date or timezone component; all times belong to one nominal
/// day. Anything that is not a valid 24-hour time is rejected, including a
/// leap second (`:60`).
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let invalid = || AnalyserError::TimestampParse(s.to_string());
    let time = NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|_| invalid())?;
    // chrono encodes a leap second as nanosecond >= 1s.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(invalid());
    }
    Ok(time)
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

/// Signed span from `start` to `end` within the same day.
pub fn elapsed_between(start: NaiveTime, end: NaiveTime) -> TimeDelta {
    end.signed_duration_since(start)
}

/// Express a span as fractional seconds.
pub fn delta_to_seconds(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}
