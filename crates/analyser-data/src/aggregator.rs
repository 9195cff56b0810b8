//! Per-user session pairing and duration totals.

use std::collections::HashMap;

use analyser_core::models::{Action, LogRecord, UserReport};
use analyser_core::time_utils::elapsed_between;
use chrono::{NaiveTime, TimeDelta};
use tracing::warn;

// ── SessionSet ────────────────────────────────────────────────────────────────

/// All events seen for one user, in file order.
#[derive(Debug, Clone)]
pub struct SessionSet {
    user: String,
    events: Vec<(NaiveTime, Action)>,
}

impl SessionSet {
    fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            events: Vec::new(),
        }
    }

    /// Records halved and rounded down. Stray ends, unmatched starts and
    /// unrecognised actions all count.
    pub fn session_count(&self) -> usize {
        self.events.len() / 2
    }

    /// Walk the events in time order and total the session spans.
    ///
    /// A start is pushed on a stack; an end pops the most recent pending
    /// start, or is dropped when none is pending. Starts still pending at
    /// the end are closed at `latest`.
    pub fn total_duration(&self, latest: Option<NaiveTime>) -> TimeDelta {
        let mut ordered: Vec<&(NaiveTime, Action)> = self.events.iter().collect();
        // Stable, so equal times keep file order.
        ordered.sort_by_key(|(time, _)| *time);

        let mut pending: Vec<NaiveTime> = Vec::new();
        let mut total = TimeDelta::zero();

        for (time, action) in ordered {
            match action {
                Action::Start => pending.push(*time),
                Action::End => {
                    if let Some(start) = pending.pop() {
                        total = total + elapsed_between(start, *time);
                    }
                }
                Action::Other(_) => {}
            }
        }

        for start in pending {
            match latest {
                Some(latest) => total = total + elapsed_between(start, latest),
                None => warn!(
                    "No latest timestamp to close session for {} started at {}",
                    self.user, start
                ),
            }
        }

        total
    }

    /// Build the summary for this user.
    pub fn report(&self, latest: Option<NaiveTime>) -> UserReport {
        UserReport {
            user: self.user.clone(),
            session_count: self.session_count(),
            total_duration: self.total_duration(latest),
        }
    }
}

// ── SessionAggregator ─────────────────────────────────────────────────────────

/// Accumulates records in a single pass over the log.
///
/// Tracks the earliest and latest time across every valid line and keeps
/// users in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    sessions: Vec<SessionSet>,
    index: HashMap<String, usize>,
    earliest: Option<NaiveTime>,
    latest: Option<NaiveTime>,
}

impl SessionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running state.
    pub fn add_record(&mut self, record: LogRecord) {
        let LogRecord { time, user, action } = record;

        self.earliest = Some(self.earliest.map_or(time, |t| t.min(time)));
        self.latest = Some(self.latest.map_or(time, |t| t.max(time)));

        let slot = match self.index.get(&user) {
            Some(&i) => i,
            None => {
                let i = self.sessions.len();
                self.sessions.push(SessionSet::new(user.clone()));
                self.index.insert(user, i);
                i
            }
        };
        self.sessions[slot].events.push((time, action));
    }

    pub fn earliest(&self) -> Option<NaiveTime> {
        self.earliest
    }

    pub fn latest(&self) -> Option<NaiveTime> {
        self.latest
    }

    /// One report per user, in first-seen order.
    pub fn reports(&self) -> Vec<UserReport> {
        self.sessions
            .iter()
            .map(|set| set.report(self.latest))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
