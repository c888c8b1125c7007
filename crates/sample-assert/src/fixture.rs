// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading sample fixtures from JSON-lines files.
//!
//! Benchmark runs write one sample object per line. Lines are kept as raw
//! JSON values so that the comparison can report elements that are not
//! samples instead of failing the whole load.

use crate::compare::decode_sample;
use crate::failure::{AssertionFailure, ListSide};
use pkb_sample::Sample;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse JSON-lines text, skipping blank lines.
pub fn parse_jsonl(text: &str) -> Result<Vec<serde_json::Value>, FixtureError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| FixtureError::Json {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Read and parse a JSON-lines fixture file.
pub async fn load_jsonl(path: &Path) -> Result<Vec<serde_json::Value>, FixtureError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_jsonl(&text)
}

/// Decode every value as a sample, failing on the first element that is not one.
pub fn decode_samples(
    values: &[serde_json::Value],
    side: ListSide,
) -> Result<Vec<Sample>, AssertionFailure> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| decode_sample(value, i, side, None))
        .collect()
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
