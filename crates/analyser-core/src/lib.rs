//! Domain types shared by the log analyser crates.
//!
//! Holds the parsed [`models::LogRecord`], the per-user [`models::UserReport`],
//! time-of-day parsing, report formatting and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
