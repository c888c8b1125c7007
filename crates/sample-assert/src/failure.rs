// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion failure type shared by every sample comparison.

use std::fmt;
use thiserror::Error;

/// Sample fields taking part in timestamp-insensitive comparison, in check order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleField {
    Metric,
    Value,
    Unit,
    Metadata,
}

impl SampleField {
    /// All compared fields, in the order they are checked
    pub const ALL: [SampleField; 4] = [
        SampleField::Metric,
        SampleField::Value,
        SampleField::Unit,
        SampleField::Metadata,
    ];

    /// Field name as it appears on the record
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleField::Metric => "metric",
            SampleField::Value => "value",
            SampleField::Unit => "unit",
            SampleField::Metadata => "metadata",
        }
    }

    /// Noun used in "have different ..." messages
    pub fn plural(&self) -> &'static str {
        match self {
            SampleField::Metric => "metrics",
            SampleField::Value => "values",
            SampleField::Unit => "units",
            SampleField::Metadata => "metadata",
        }
    }
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a list comparison an element came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListSide {
    First,
    Second,
}

impl fmt::Display for ListSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSide::First => write!(f, "first list"),
            ListSide::Second => write!(f, "second list"),
        }
    }
}

/// Why a comparison failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureCause {
    /// Two samples differ in a compared field
    FieldMismatch(SampleField),
    /// Two lists have different lengths
    LengthMismatch { left: usize, right: usize },
    /// A list element could not be read as a sample
    NotASample { index: usize, side: ListSide },
}

impl FailureCause {
    /// Short machine-readable name of the cause
    pub fn kind(&self) -> &'static str {
        match self {
            FailureCause::FieldMismatch(_) => "field_mismatch",
            FailureCause::LengthMismatch { .. } => "length_mismatch",
            FailureCause::NotASample { .. } => "not_a_sample",
        }
    }
}

/// A failed sample assertion
///
/// Display yields the full human-readable message, including any list
/// position appended by [`AssertionFailure::with_list_index`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
    cause: FailureCause,
    list_index: Option<usize>,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>, cause: FailureCause) -> Self {
        Self {
            message: message.into(),
            cause,
            list_index: None,
        }
    }

    /// Same failure, reported as occurring at `index` of a list comparison
    pub fn with_list_index(self, index: usize) -> Self {
        Self {
            message: format!("{} (was item {} in list)", self.message, index),
            cause: self.cause,
            list_index: Some(index),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> &FailureCause {
        &self.cause
    }

    /// Position of the mismatching pair, for failures raised from a list comparison
    pub fn list_index(&self) -> Option<usize> {
        self.list_index
    }

    /// The mismatched field, if this is a field-level failure
    pub fn field(&self) -> Option<SampleField> {
        match self.cause {
            FailureCause::FieldMismatch(field) => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
