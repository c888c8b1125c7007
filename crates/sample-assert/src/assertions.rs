// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Panicking assertion entry points for tests.
//!
//! Three ways to assert timestamp-insensitive equality, from most to least
//! explicit:
//!
//! - [`SampleAssertions`], a mixin trait a test fixture implements to gain the
//!   assertion methods.
//! - The [`assert_samples_eq!`](crate::assert_samples_eq) and
//!   [`assert_sample_lists_eq!`](crate::assert_sample_lists_eq) macros.
//! - [`UpToTimestamp`], whose `PartialEq` ignores timestamps so plain
//!   `assert_eq!` can be used.

use crate::compare::{
    compare_sample_lists_up_to_timestamp, compare_sample_values_up_to_timestamp,
    compare_samples_up_to_timestamp,
};
use crate::failure::AssertionFailure;
use pkb_sample::Sample;
use std::fmt;

/// Wrapper whose equality ignores sample timestamps
///
/// ```
/// use pkb_sample::{Metadata, Sample};
/// use sample_assert::SampleExt;
///
/// let a = Sample::with_timestamp("latency", 10.0, "ms", Metadata::new(), 100.0);
/// let b = a.at(200.0);
/// assert_eq!(a.up_to_timestamp(), b.up_to_timestamp());
/// ```
#[derive(Clone, Copy)]
pub struct UpToTimestamp<T>(pub T);

impl PartialEq for UpToTimestamp<&Sample> {
    fn eq(&self, other: &Self) -> bool {
        compare_samples_up_to_timestamp(self.0, other.0, None).is_ok()
    }
}

impl PartialEq for UpToTimestamp<&[Sample]> {
    fn eq(&self, other: &Self) -> bool {
        compare_sample_lists_up_to_timestamp(self.0, other.0, None).is_ok()
    }
}

impl<T: fmt::Debug> fmt::Debug for UpToTimestamp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UpToTimestamp").field(&self.0).finish()
    }
}

/// Fluent construction of [`UpToTimestamp`]
pub trait SampleExt {
    fn up_to_timestamp(&self) -> UpToTimestamp<&Self>;
}

impl SampleExt for Sample {
    fn up_to_timestamp(&self) -> UpToTimestamp<&Self> {
        UpToTimestamp(self)
    }
}

impl SampleExt for [Sample] {
    fn up_to_timestamp(&self) -> UpToTimestamp<&Self> {
        UpToTimestamp(self)
    }
}

/// Sample assertions for test fixtures.
///
/// Every method has a default body; implement the trait with an empty
/// `impl SampleAssertions for MyFixture {}` to pick them up.
pub trait SampleAssertions {
    /// Panic unless `a` and `b` match in metric, value, unit and metadata
    #[track_caller]
    fn assert_samples_equal_up_to_timestamp(&self, a: &Sample, b: &Sample, msg: Option<&str>) {
        if let Err(failure) = compare_samples_up_to_timestamp(a, b, msg) {
            fail(failure)
        }
    }

    /// Panic unless both lists match pairwise, ignoring timestamps
    #[track_caller]
    fn assert_sample_lists_equal_up_to_timestamp(
        &self,
        a: &[Sample],
        b: &[Sample],
        msg: Option<&str>,
    ) {
        if let Err(failure) = compare_sample_lists_up_to_timestamp(a, b, msg) {
            fail(failure)
        }
    }

    /// Like [`assert_sample_lists_equal_up_to_timestamp`](Self::assert_sample_lists_equal_up_to_timestamp)
    /// for lists whose elements may not be samples at all
    #[track_caller]
    fn assert_sample_values_equal_up_to_timestamp(
        &self,
        a: &[serde_json::Value],
        b: &[serde_json::Value],
        msg: Option<&str>,
    ) {
        if let Err(failure) = compare_sample_values_up_to_timestamp(a, b, msg) {
            fail(failure)
        }
    }
}

#[doc(hidden)]
#[track_caller]
#[allow(clippy::panic)]
pub fn fail(failure: AssertionFailure) -> ! {
    panic!("{}", failure)
}

/// Assert two samples are equal, ignoring timestamps.
///
/// Accepts an optional `format!`-style message that replaces the generated one.
#[macro_export]
macro_rules! assert_samples_eq {
    ($a:expr, $b:expr $(,)?) => {
        if let Err(failure) = $crate::compare_samples_up_to_timestamp(&$a, &$b, None) {
            $crate::assertions::fail(failure)
        }
    };
    ($a:expr, $b:expr, $($arg:tt)+) => {{
        let msg = format!($($arg)+);
        if let Err(failure) = $crate::compare_samples_up_to_timestamp(&$a, &$b, Some(&msg)) {
            $crate::assertions::fail(failure)
        }
    }};
}

/// Assert two sample lists are equal element-wise, ignoring timestamps.
#[macro_export]
macro_rules! assert_sample_lists_eq {
    ($a:expr, $b:expr $(,)?) => {
        if let Err(failure) = $crate::compare_sample_lists_up_to_timestamp(&$a, &$b, None) {
            $crate::assertions::fail(failure)
        }
    };
    ($a:expr, $b:expr, $($arg:tt)+) => {{
        let msg = format!($($arg)+);
        if let Err(failure) =
            $crate::compare_sample_lists_up_to_timestamp(&$a, &$b, Some(&msg))
        {
            $crate::assertions::fail(failure)
        }
    }};
}

#[cfg(test)]
#[path = "assertions_tests.rs"]
mod tests;
