// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;

#[rstest]
#[case(SampleField::Metric, "metric", "metrics")]
#[case(SampleField::Value, "value", "values")]
#[case(SampleField::Unit, "unit", "units")]
#[case(SampleField::Metadata, "metadata", "metadata")]
fn field_names(#[case] field: SampleField, #[case] name: &str, #[case] plural: &str) {
    assert_eq!(field.as_str(), name);
    assert_eq!(field.to_string(), name);
    assert_eq!(field.plural(), plural);
}

#[test]
fn display_is_message() {
    let failure = AssertionFailure::new("boom", FailureCause::FieldMismatch(SampleField::Unit));
    assert_eq!(failure.to_string(), "boom");
    assert_eq!(failure.field(), Some(SampleField::Unit));
}

#[test]
fn with_list_index_keeps_cause() {
    let failure = AssertionFailure::new(
        "Samples a and b have different units",
        FailureCause::FieldMismatch(SampleField::Unit),
    )
    .with_list_index(3);
    assert_eq!(
        failure.message(),
        "Samples a and b have different units (was item 3 in list)"
    );
    assert_eq!(failure.cause(), &FailureCause::FieldMismatch(SampleField::Unit));
    assert_eq!(failure.list_index(), Some(3));
}

#[test]
fn non_field_failures_have_no_field() {
    let failure = AssertionFailure::new(
        "Lists differ",
        FailureCause::LengthMismatch { left: 1, right: 2 },
    );
    assert_eq!(failure.field(), None);
    assert_eq!(failure.list_index(), None);
}

#[test]
fn list_side_display() {
    assert_eq!(ListSide::First.to_string(), "first list");
    assert_eq!(ListSide::Second.to_string(), "second list");
}

#[test]
fn cause_kinds() {
    assert_eq!(FailureCause::FieldMismatch(SampleField::Value).kind(), "field_mismatch");
    assert_eq!(FailureCause::LengthMismatch { left: 0, right: 1 }.kind(), "length_mismatch");
    assert_eq!(
        FailureCause::NotASample { index: 0, side: ListSide::First }.kind(),
        "not_a_sample"
    );
}
