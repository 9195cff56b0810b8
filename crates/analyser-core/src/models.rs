use chrono::{NaiveTime, TimeDelta};
use std::fmt;

use crate::error::{AnalyserError, Result};
use crate::time_utils::{delta_to_seconds, parse_time_of_day};

/// What a log line says happened to a user's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The literal token `Start`.
    Start,
    /// The literal token `End`.
    End,
    /// Any other action text, kept verbatim.
    Other(String),
}

impl Action {
    /// Classify the free-text action field. Only an exact `Start` or `End`
    /// is recognised.
    pub fn from_text(text: &str) -> Self {
        match text {
            "Start" => Action::Start,
            "End" => Action::End,
            other => Action::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => f.write_str("Start"),
            Action::End => f.write_str("End"),
            Action::Other(text) => f.write_str(text),
        }
    }
}

/// One parsed line of the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Time of day the event happened.
    pub time: NaiveTime,
    /// User the event belongs to.
    pub user: String,
    /// Session action.
    pub action: Action,
}

impl LogRecord {
    /// Parse `HH:MM:SS <user> <action-text>`.
    ///
    /// The line is trimmed and split on whitespace into at most three
    /// fields; the third keeps any inner whitespace verbatim. Fewer than
    /// three fields yields [`AnalyserError::MalformedLine`], a bad time
    /// field yields [`AnalyserError::TimestampParse`].
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let malformed = || AnalyserError::MalformedLine(trimmed.to_string());

        let (time_str, rest) = trimmed.split_once(char::is_whitespace).ok_or_else(malformed)?;
        let (user, action) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(malformed)?;

        let time = parse_time_of_day(time_str)?;

        Ok(Self {
            time,
            user: user.to_string(),
            action: Action::from_text(action.trim_start()),
        })
    }
}

/// Per-user summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    pub user: String,
    /// Number of records for the user divided by two, rounded down.
    pub session_count: usize,
    /// Sum of matched session spans plus unmatched starts closed at the
    /// latest timestamp in the log.
    pub total_duration: TimeDelta,
}

impl UserReport {
    /// Total active duration in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        delta_to_seconds(self.total_duration)
    }
}

impl fmt::Display for UserReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formatting::format_report_line(self))
    }
}
