// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of comparing two sample files, and its rendering.

use crate::cli::{exit_codes, OutputFormat};
use crate::compare::{compare_sample_values_up_to_timestamp, differing_fields};
use crate::diagnostic::print_error;
use crate::diff::render_diff;
use crate::failure::ListSide;
use crate::fixture::decode_samples;
use serde::Serialize;
use std::io::Write;

/// Result of a `sample-diff` comparison
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiffOutcome {
    Match {
        samples: usize,
    },
    Mismatch {
        message: String,
        cause: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        /// Every differing field of the failing pair, not just the reported one
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<&'static str>,
        diff: String,
    },
}

impl DiffOutcome {
    /// Compare `left` against `right`, ignoring timestamps
    pub fn evaluate(
        left: &[serde_json::Value],
        right: &[serde_json::Value],
        msg: Option<&str>,
        context: usize,
    ) -> Self {
        match compare_sample_values_up_to_timestamp(left, right, msg) {
            Ok(()) => DiffOutcome::Match {
                samples: left.len(),
            },
            Err(failure) => DiffOutcome::Mismatch {
                message: failure.message().to_string(),
                cause: failure.cause().kind(),
                field: failure.field().map(|f| f.as_str()),
                index: failure.list_index(),
                fields: pair_differences(left, right, failure.list_index()),
                diff: render_diff(left, right, context),
            },
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, DiffOutcome::Match { .. })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_match() {
            exit_codes::MATCH
        } else {
            exit_codes::MISMATCH
        }
    }

    /// Render for stdout in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    /// Write the rendered report to `out` and return the process exit code.
    ///
    /// Rendering or write failures are reported on stderr and map to
    /// [`exit_codes::ERROR`], never to the mismatch code.
    pub fn write_report<W: Write>(&self, format: OutputFormat, out: &mut W) -> i32 {
        let written = match self.render(format) {
            Ok(rendered) => writeln!(out, "{}", rendered).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match written {
            Ok(()) => self.exit_code(),
            Err(e) => {
                print_error(format_args!("failed to write report: {}", e));
                exit_codes::ERROR
            }
        }
    }

    fn render_text(&self) -> String {
        match self {
            DiffOutcome::Match { samples } => {
                format!("ok: {} samples match (timestamps ignored)", samples)
            }
            DiffOutcome::Mismatch {
                message,
                fields,
                diff,
                ..
            } => {
                let mut text = format!("FAIL: {}", message);
                if !fields.is_empty() {
                    text.push_str(&format!("\ndiffering fields: {}", fields.join(", ")));
                }
                if !diff.is_empty() {
                    text.push_str(&format!("\n\n{}", diff.trim_end()));
                }
                text
            }
        }
    }
}

/// Names of all fields differing between `left[index]` and `right[index]`
fn pair_differences(
    left: &[serde_json::Value],
    right: &[serde_json::Value],
    index: Option<usize>,
) -> Vec<&'static str> {
    let Some(index) = index else {
        return Vec::new();
    };
    let (Ok(left), Ok(right)) = (
        decode_samples(left, ListSide::First),
        decode_samples(right, ListSide::Second),
    ) else {
        return Vec::new();
    };
    match (left.get(index), right.get(index)) {
        (Some(a), Some(b)) => differing_fields(a, b)
            .iter()
            .map(|field| field.as_str())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
