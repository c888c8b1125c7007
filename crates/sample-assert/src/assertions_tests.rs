// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use pkb_sample::Metadata;
use serde_json::json;
use std::panic;

struct BenchmarkTest;

impl SampleAssertions for BenchmarkTest {}

fn latency(value: f64, ts: f64) -> Sample {
    Sample::with_timestamp("latency", value, "ms", Metadata::new(), ts)
}

fn tagged(value: i64) -> Sample {
    let mut metadata = Metadata::new();
    metadata.insert("k".to_string(), json!(value));
    Sample::with_timestamp("latency", 10.0, "ms", metadata, 0.0)
}

/// Run `f` and return its panic message
fn panic_message(f: impl FnOnce() + panic::UnwindSafe) -> String {
    let payload = panic::catch_unwind(f).expect_err("expected a panic");
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        panic!("unexpected panic payload")
    }
}

#[test]
fn mixin_accepts_timestamp_only_difference() {
    BenchmarkTest.assert_samples_equal_up_to_timestamp(&latency(10.0, 100.0), &latency(10.0, 200.0), None);
}

#[test]
#[should_panic(expected = "have different values")]
fn mixin_rejects_value_difference() {
    BenchmarkTest.assert_samples_equal_up_to_timestamp(&latency(10.0, 100.0), &latency(11.0, 100.0), None);
}

#[test]
#[should_panic(expected = "custom failure")]
fn mixin_uses_caller_message() {
    BenchmarkTest.assert_samples_equal_up_to_timestamp(
        &latency(10.0, 0.0),
        &latency(11.0, 0.0),
        Some("custom failure"),
    );
}

#[test]
fn mixin_list_accepts_restamped_list() {
    let a = vec![latency(1.0, 1.0), tagged(1)];
    let b = vec![latency(1.0, 5.0), tagged(1).at(5.0)];
    BenchmarkTest.assert_sample_lists_equal_up_to_timestamp(&a, &b, None);
}

#[test]
#[should_panic(expected = "are not the same length")]
fn mixin_list_rejects_length_mismatch() {
    let s1 = latency(1.0, 0.0);
    BenchmarkTest.assert_sample_lists_equal_up_to_timestamp(&[s1.clone(), latency(2.0, 0.0)], &[s1], None);
}

#[test]
fn mixin_list_reports_field_and_index() {
    let message = panic_message(|| {
        BenchmarkTest.assert_sample_lists_equal_up_to_timestamp(
            &[latency(1.0, 0.0), tagged(1)],
            &[latency(1.0, 0.0), tagged(2)],
            None,
        )
    });
    assert!(message.contains("have different metadata"), "{message}");
    assert!(message.contains("was item 1 in list"), "{message}");
}

#[test]
fn mixin_value_list_reports_non_sample() {
    let s1 = latency(1.0, 0.0).as_json();
    let message = panic_message(|| {
        BenchmarkTest.assert_sample_values_equal_up_to_timestamp(
            &[s1.clone(), json!("not-a-sample")],
            &[s1.clone(), s1.clone()],
            None,
        )
    });
    assert!(message.contains("\"not-a-sample\""), "{message}");
    assert!(message.contains("item 1"), "{message}");
}

#[test]
fn macro_accepts_equal_samples() {
    let a = latency(3.0, 1.0);
    let b = latency(3.0, 2.0);
    crate::assert_samples_eq!(a, b);
    crate::assert_samples_eq!(&a, &b, "never shown");
}

#[test]
#[should_panic(expected = "run 7 drifted")]
fn macro_formats_caller_message() {
    let run = 7;
    crate::assert_samples_eq!(latency(3.0, 0.0), latency(4.0, 0.0), "run {} drifted", run);
}

#[test]
fn list_macro_accepts_vec_and_array() {
    let a = vec![latency(1.0, 0.0), latency(2.0, 0.0)];
    let b = [latency(1.0, 9.0), latency(2.0, 9.0)];
    crate::assert_sample_lists_eq!(a, b);
}

#[test]
#[should_panic(expected = "(was item 0 in list)")]
fn list_macro_appends_index() {
    crate::assert_sample_lists_eq!(vec![latency(1.0, 0.0)], vec![latency(2.0, 0.0)], "batch {}", 3);
}

#[test]
fn up_to_timestamp_equality() {
    let a = latency(10.0, 100.0);
    assert_eq!(a.up_to_timestamp(), a.at(200.0).up_to_timestamp());
    assert_ne!(a.up_to_timestamp(), latency(11.0, 100.0).up_to_timestamp());
}

#[test]
fn up_to_timestamp_on_lists() {
    let a = vec![latency(1.0, 0.0), tagged(1)];
    let b = vec![latency(1.0, 3.0), tagged(1).at(3.0)];
    let c = vec![latency(1.0, 3.0)];
    assert_eq!(a.up_to_timestamp(), b.up_to_timestamp());
    assert_ne!(a.up_to_timestamp(), c.up_to_timestamp());
    assert_eq!(UpToTimestamp(a.as_slice()), UpToTimestamp(b.as_slice()));
}

#[test]
fn up_to_timestamp_debug_shows_sample() {
    let a = latency(1.0, 0.0);
    let debug = format!("{:?}", a.up_to_timestamp());
    assert!(debug.starts_with("UpToTimestamp(Sample {"), "{debug}");
}
