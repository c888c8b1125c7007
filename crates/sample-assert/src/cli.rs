// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments for `sample-diff`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Exit codes returned by `sample-diff`
pub mod exit_codes {
    /// Both files hold the same samples up to timestamps
    pub const MATCH: i32 = 0;
    /// The comparison failed
    pub const MISMATCH: i32 = 1;
    /// A file could not be read or parsed
    pub const ERROR: i32 = 2;
}

/// Compare two benchmark sample files, ignoring timestamps
#[derive(Parser, Debug, Clone)]
#[command(name = "sample-diff", version, about = "Compare benchmark samples, ignoring timestamps")]
pub struct Cli {
    /// Expected samples, one JSON object per line
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Actual samples, one JSON object per line
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text", env = "SAMPLE_DIFF_FORMAT")]
    pub format: OutputFormat,

    /// Lines of context around each diff hunk
    #[arg(long, default_value_t = 3, env = "SAMPLE_DIFF_CONTEXT")]
    pub context: usize,

    /// Message to report instead of the generated one
    #[arg(long)]
    pub message: Option<String>,

    /// Print progress to stderr
    #[arg(short, long, env = "SAMPLE_DIFF_VERBOSE")]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
