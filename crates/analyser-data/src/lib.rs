//! Data layer for the log analyser.
//!
//! Reads session log lines, pairs Start/End events per user and runs the
//! top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;
