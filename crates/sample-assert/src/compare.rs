// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp-insensitive comparison of samples and sample lists.
//!
//! Every function here returns `Err(AssertionFailure)` instead of panicking;
//! the panicking entry points live in [`crate::assertions`].

use crate::failure::{AssertionFailure, FailureCause, ListSide, SampleField};
use pkb_sample::Sample;
use std::fmt::Display;

/// Compare two samples, ignoring their timestamps.
///
/// Fields are checked in [`SampleField::ALL`] order and only the first
/// mismatch is reported. `msg` replaces the generated message.
pub fn compare_samples_up_to_timestamp(
    a: &Sample,
    b: &Sample,
    msg: Option<&str>,
) -> Result<(), AssertionFailure> {
    match SampleField::ALL
        .into_iter()
        .find(|field| !field_eq(a, b, *field))
    {
        None => Ok(()),
        Some(field) => {
            let message = match msg {
                Some(msg) => msg.to_string(),
                None => format!("Samples {} and {} have different {}", a, b, field.plural()),
            };
            Err(AssertionFailure::new(
                message,
                FailureCause::FieldMismatch(field),
            ))
        }
    }
}

/// Compare two sample lists element-wise, ignoring timestamps.
pub fn compare_sample_lists_up_to_timestamp(
    a: &[Sample],
    b: &[Sample],
    msg: Option<&str>,
) -> Result<(), AssertionFailure> {
    check_lengths(a, b, msg)?;
    compare_pairs(a.iter().zip(b), msg)
}

/// Compare two lists of untyped JSON values as sample lists.
///
/// Lengths are checked first, then every element of both lists must decode
/// as a [`Sample`] before any field comparison happens.
pub fn compare_sample_values_up_to_timestamp(
    a: &[serde_json::Value],
    b: &[serde_json::Value],
    msg: Option<&str>,
) -> Result<(), AssertionFailure> {
    check_lengths(a, b, msg)?;

    let mut left = Vec::with_capacity(a.len());
    let mut right = Vec::with_capacity(b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        left.push(decode_sample(x, i, ListSide::First, msg)?);
        right.push(decode_sample(y, i, ListSide::Second, msg)?);
    }

    compare_pairs(left.iter().zip(&right), msg)
}

/// Read `value` as a sample, failing with the element's list position.
///
/// A `timestamp` that is not a number is dropped rather than rejected, since
/// comparisons never read it.
pub fn decode_sample(
    value: &serde_json::Value,
    index: usize,
    side: ListSide,
    msg: Option<&str>,
) -> Result<Sample, AssertionFailure> {
    let mut candidate = value.clone();
    if let serde_json::Value::Object(map) = &mut candidate {
        if map.get("timestamp").is_some_and(|ts| !ts.is_number()) {
            map.remove("timestamp");
        }
    }
    serde_json::from_value(candidate).map_err(|_| {
        let message = match msg {
            Some(msg) => msg.to_string(),
            None => format!(
                "{} (item {} in {}) is not a Sample object",
                value, index, side
            ),
        };
        AssertionFailure::new(message, FailureCause::NotASample { index, side })
    })
}

/// Every compared field on which `a` and `b` differ, in check order
pub fn differing_fields(a: &Sample, b: &Sample) -> Vec<SampleField> {
    SampleField::ALL
        .into_iter()
        .filter(|field| !field_eq(a, b, *field))
        .collect()
}

fn field_eq(a: &Sample, b: &Sample, field: SampleField) -> bool {
    match field {
        SampleField::Metric => a.metric == b.metric,
        SampleField::Value => a.value == b.value,
        SampleField::Unit => a.unit == b.unit,
        SampleField::Metadata => {
            a.metadata.len() == b.metadata.len()
                && a.metadata
                    .iter()
                    .all(|(k, v)| b.metadata.get(k).is_some_and(|w| json_eq(v, w)))
        }
    }
}

/// JSON equality where numbers compare by numeric value, so `1 == 1.0`
fn json_eq(a: &serde_json::Value, b: &serde_json::Value) -> bool {
    use serde_json::Value;
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_eq(x, y)))
        }
        _ => a == b,
    }
}

fn check_lengths<T: Display>(a: &[T], b: &[T], msg: Option<&str>) -> Result<(), AssertionFailure> {
    if a.len() == b.len() {
        return Ok(());
    }
    let message = match msg {
        Some(msg) => msg.to_string(),
        None => format!(
            "Lists {} and {} are not the same length",
            render_list(a),
            render_list(b)
        ),
    };
    Err(AssertionFailure::new(
        message,
        FailureCause::LengthMismatch {
            left: a.len(),
            right: b.len(),
        },
    ))
}

fn compare_pairs<'a>(
    pairs: impl Iterator<Item = (&'a Sample, &'a Sample)>,
    msg: Option<&str>,
) -> Result<(), AssertionFailure> {
    for (i, (x, y)) in pairs.enumerate() {
        compare_samples_up_to_timestamp(x, y, msg).map_err(|e| e.with_list_index(i))?;
    }
    Ok(())
}

fn render_list<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
