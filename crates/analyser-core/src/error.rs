use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the log analyser.
#[derive(Error, Debug)]
pub enum AnalyserError {
    /// The log file could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into time, user and action fields.
    #[error("Malformed log line: {0}")]
    MalformedLine(String),

    /// The time field is not a valid `HH:MM:SS` time of day.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),
}

/// Convenience alias used throughout the analyser crates.
pub type Result<T> = std::result::Result<T, AnalyserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AnalyserError::FileRead {
            path: PathBuf::from("/var/log/sessions.log"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/var/log/sessions.log"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_malformed_line() {
        let err = AnalyserError::MalformedLine("09:00:00 alice".to_string());
        assert_eq!(err.to_string(), "Malformed log line: 09:00:00 alice");
    }

    #[test]
    fn test_error_display_timestamp_parse() {
        let err = AnalyserError::TimestampParse("25:00:00".to_string());
        assert_eq!(err.to_string(), "Invalid timestamp format: 25:00:00");
    }
}
