use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed when the arguments are wrong.
pub const USAGE: &str = "Usage: log-analyser <log_file>";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-user session counts and durations from a plain-text session log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "log-analyser",
    about = "Per-user session counts and durations from a plain-text session log",
    version
)]
pub struct Settings {
    /// Session log to analyse
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse an explicit argument list (program name first).
    ///
    /// `--debug` overrides `--log-level`.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut settings = Settings::try_parse_from(args)?;
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_settings_single_positional() {
        let settings = Settings::try_load_from(["log-analyser", "sessions.log"]).unwrap();
        assert_eq!(settings.log_file, PathBuf::from("sessions.log"));
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
    }

    #[test]
    fn test_settings_dash_path_needs_separator() {
        let err = Settings::try_load_from(["log-analyser", "-sessions.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let settings = Settings::try_load_from(["log-analyser", "--", "-sessions.log"]).unwrap();
        assert_eq!(settings.log_file, PathBuf::from("-sessions.log"));
    }

    #[test]
    fn test_settings_missing_path_is_error() {
        let err = Settings::try_load_from(["log-analyser"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_settings_extra_positional_is_error() {
        let err = Settings::try_load_from(["log-analyser", "a.log", "b.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_settings_debug_overrides_level() {
        let settings =
            Settings::try_load_from(["log-analyser", "--log-level", "ERROR", "--debug", "x.log"])
                .unwrap();
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_settings_rejects_unknown_level() {
        let err =
            Settings::try_load_from(["log-analyser", "--log-level", "LOUD", "x.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_settings_help_is_display_help() {
        let err = Settings::try_load_from(["log-analyser", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
