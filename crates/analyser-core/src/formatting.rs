use crate::models::UserReport;

/// Format a number of seconds with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use analyser_core::formatting::format_seconds;
///
/// assert_eq!(format_seconds(300.0), "300.00");
/// assert_eq!(format_seconds(0.0), "0.00");
/// assert_eq!(format_seconds(1.5), "1.50");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2}", seconds)
}

/// Render one report line:
/// `User: <user>, Sessions: <count>, Duration: <seconds> seconds`.
///
/// # Examples
///
/// ```
/// use analyser_core::formatting::format_report_line;
/// use analyser_core::models::UserReport;
/// use chrono::TimeDelta;
///
/// let report = UserReport {
///     user: "bob".to_string(),
///     session_count: 1,
///     total_duration: TimeDelta::seconds(900),
/// };
/// assert_eq!(
///     format_report_line(&report),
///     "User: bob, Sessions: 1, Duration: 900.00 seconds"
/// );
/// ```
pub fn format_report_line(report: &UserReport) -> String {
    format!(
        "User: {}, Sessions: {}, Duration: {} seconds",
        report.user,
        report.session_count,
        format_seconds(report.total_duration_seconds())
    )
}
