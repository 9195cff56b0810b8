mod bootstrap;

use std::io::Write;
use std::process::ExitCode;

use analyser_core::settings::{Settings, USAGE};
use analyser_data::analysis::{analyze_log, LogAnalysis};
use anyhow::Result;
use clap::error::ErrorKind;

fn main() -> Result<ExitCode> {
    let settings = match Settings::try_load_from(std::env::args_os()) {
        Ok(settings) => settings,
        Err(err) => return Ok(handle_arg_error(&err)),
    };

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!(
        "Log Analyser v{} reading {}",
        env!("CARGO_PKG_VERSION"),
        settings.log_file.display()
    );

    let analysis = analyze_log(&settings.log_file)?;

    tracing::info!(
        "{} lines read, {} skipped, {} users",
        analysis.stats.lines_read,
        analysis.stats.lines_skipped,
        analysis.reports.len()
    );

    let stdout = std::io::stdout();
    write_report(&analysis, &mut stdout.lock())?;

    Ok(ExitCode::SUCCESS)
}

/// Help and version requests are printed by clap; every other argument
/// problem prints the usage line to stdout and exits with status 1.
fn handle_arg_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{}", USAGE);
            ExitCode::from(1)
        }
    }
}

/// Write one line per user, in first-seen order.
fn write_report(analysis: &LogAnalysis, out: &mut impl Write) -> std::io::Result<()> {
    for report in &analysis.reports {
        writeln!(out, "{}", report)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyser_data::analysis::analyze_reader;
    use std::io::Cursor;

    fn render(input: &str) -> String {
        let analysis = analyze_reader(Cursor::new(input)).unwrap();
        let mut out = Vec::new();
        write_report(&analysis, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_report_lines() {
        let output = render("10:00:00 alice Start\n10:05:00 alice End\n");
        assert_eq!(output, "User: alice, Sessions: 1, Duration: 300.00 seconds\n");
    }

    #[test]
    fn test_write_report_empty_log() {
        assert_eq!(render("junk\n"), "");
    }

    #[test]
    fn test_write_report_multiple_users_first_seen_order() {
        let output = render(
            "12:00:00 bob Start\n09:00:00 alice Start\n09:10:00 alice End\n12:00:10 bob End\n",
        );
        assert_eq!(
            output,
            "User: bob, Sessions: 1, Duration: 10.00 seconds\n\
             User: alice, Sessions: 1, Duration: 600.00 seconds\n"
        );
    }
}
