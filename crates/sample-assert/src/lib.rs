// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp-insensitive assertions for benchmark samples.
//!
//! Benchmarks stamp every [`Sample`](pkb_sample::Sample) with its creation
//! time, so two runs that measured the same thing never compare equal with
//! `==`. This crate compares samples on metric, value, unit and metadata only,
//! and compares sample lists element-wise the same way.
//!
//! ```
//! use pkb_sample::{Metadata, Sample};
//! use sample_assert::{assert_sample_lists_eq, assert_samples_eq};
//!
//! let a = Sample::with_timestamp("latency", 10.0, "ms", Metadata::new(), 100.0);
//! let b = Sample::with_timestamp("latency", 10.0, "ms", Metadata::new(), 200.0);
//! assert_samples_eq!(a, b);
//! assert_sample_lists_eq!(vec![a], vec![b], "run {}", 1);
//! ```

pub mod assertions;
#[doc(hidden)]
pub mod cli;
mod compare;
#[doc(hidden)]
pub mod diagnostic;
mod diff;
mod failure;
mod fixture;
#[doc(hidden)]
pub mod report;

pub use assertions::{SampleAssertions, SampleExt, UpToTimestamp};
pub use compare::{
    compare_sample_lists_up_to_timestamp, compare_sample_values_up_to_timestamp,
    compare_samples_up_to_timestamp, decode_sample, differing_fields,
};
pub use diff::render_diff;
pub use failure::{AssertionFailure, FailureCause, ListSide, SampleField};
pub use fixture::{decode_samples, load_jsonl, parse_jsonl, FixtureError};
