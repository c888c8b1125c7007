// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark sample records.
//!
//! A [`Sample`] is a single measurement emitted by a benchmark run: a metric
//! name, a numeric value, its unit, free-form metadata tags and the wall-clock
//! time it was produced.

mod sample;

pub use sample::{Metadata, Sample};
