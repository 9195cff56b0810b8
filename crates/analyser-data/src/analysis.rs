//! Top-level log analysis pipeline.
//!
//! Scans a log once, feeding every valid record into a
//! [`SessionAggregator`], and returns a [`LogAnalysis`] ready for printing.

use std::io::BufRead;
use std::path::Path;

use analyser_core::error::{AnalyserError, Result};
use analyser_core::models::UserReport;
use chrono::NaiveTime;
use tracing::debug;

use crate::aggregator::SessionAggregator;
use crate::reader::{open_log, scan_records, ScanStats};

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`analyze_log`].
#[derive(Debug, Clone)]
pub struct LogAnalysis {
    /// One entry per user, in order of first appearance.
    pub reports: Vec<UserReport>,
    /// Earliest time across all valid lines.
    pub earliest: Option<NaiveTime>,
    /// Latest time across all valid lines; unmatched starts close here.
    pub latest: Option<NaiveTime>,
    /// Line counts from the scan.
    pub stats: ScanStats,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Analyse the log file at `path`.
///
/// Open and read failures are returned as [`AnalyserError::FileRead`].
pub fn analyze_log(path: &Path) -> Result<LogAnalysis> {
    let reader = open_log(path)?;
    let analysis = analyze_reader(reader).map_err(|source| AnalyserError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Analysed {}: {} users, earliest {:?}, latest {:?}",
        path.display(),
        analysis.reports.len(),
        analysis.earliest,
        analysis.latest,
    );

    Ok(analysis)
}

/// Analyse log lines from any buffered reader.
pub fn analyze_reader<R: BufRead>(reader: R) -> std::io::Result<LogAnalysis> {
    let mut aggregator = SessionAggregator::new();
    let stats = scan_records(reader, |record| aggregator.add_record(record))?;

    Ok(LogAnalysis {
        reports: aggregator.reports(),
        earliest: aggregator.earliest(),
        latest: aggregator.latest(),
        stats,
    })
}
