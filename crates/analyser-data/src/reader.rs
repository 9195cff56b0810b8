//! Line-by-line loading of session log files.
//!
//! Each line is parsed into a [`LogRecord`]; lines that do not parse are
//! dropped and only counted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use analyser_core::error::{AnalyserError, Result};
use analyser_core::models::LogRecord;
use tracing::{debug, trace};

/// Line counts gathered while scanning a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Open `path` for buffered reading.
pub fn open_log(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| AnalyserError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Scan every line of `reader`, handing each valid record to `sink` in file
/// order.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Malformed lines are skipped
/// silently. A failure to read from the underlying source (including
/// invalid UTF-8) aborts the scan.
pub fn scan_records<R, F>(reader: R, mut sink: F) -> std::io::Result<ScanStats>
where
    R: BufRead,
    F: FnMut(LogRecord),
{
    let mut stats = ScanStats::default();

    for chunk in reader.lines() {
        let chunk = chunk?;

        for line in split_carriage_returns(&chunk) {
            stats.lines_read += 1;

            match LogRecord::parse(line) {
                Ok(record) => sink(record),
                Err(e) => {
                    stats.lines_skipped += 1;
                    trace!("Skipping line {}: {}", stats.lines_read, e);
                }
            }
        }
    }

    debug!(
        "{} lines read, {} skipped",
        stats.lines_read, stats.lines_skipped
    );

    Ok(stats)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Break a `\n`-delimited chunk on bare `\r` terminators. An empty chunk is
/// still one (empty) line.
fn split_carriage_returns(chunk: &str) -> Vec<&str> {
    if chunk.is_empty() {
        return vec![""];
    }
    chunk.split_terminator('\r').collect()
}
