// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample record type.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Auxiliary tags attached to a sample
pub type Metadata = HashMap<String, serde_json::Value>;

/// A single benchmark measurement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Metric name (e.g. "latency")
    pub metric: String,

    /// Measured value
    pub value: f64,

    /// Unit of `value` (e.g. "ms")
    pub unit: String,

    /// Auxiliary tags
    #[serde(default)]
    pub metadata: Metadata,

    /// Creation time in seconds since the Unix epoch
    #[serde(default)]
    pub timestamp: f64,
}

impl Sample {
    /// Create a sample stamped with the current wall-clock time
    pub fn new(
        metric: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        Self::with_timestamp(metric, value, unit, metadata, now_secs())
    }

    /// Create a sample with an explicit timestamp
    pub fn with_timestamp(
        metric: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        metadata: Metadata,
        timestamp: f64,
    ) -> Self {
        Self {
            metric: metric.into(),
            value,
            unit: unit.into(),
            metadata,
            timestamp,
        }
    }

    /// Copy of this sample re-stamped at `timestamp`
    pub fn at(&self, timestamp: f64) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }

    /// JSON form as written by the benchmark runner
    pub fn as_json(&self) -> serde_json::Value {
        serde_json::json!({
            "metric": self.metric,
            "value": self.value,
            "unit": self.unit,
            "metadata": sorted(&self.metadata),
            "timestamp": self.timestamp,
        })
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata = serde_json::to_string(&sorted(&self.metadata)).map_err(|_| fmt::Error)?;
        write!(
            f,
            "Sample(metric={:?}, value={}, unit={:?}, metadata={}, timestamp={})",
            self.metric, self.value, self.unit, metadata, self.timestamp
        )
    }
}

/// Metadata with keys in a stable order, for rendering
fn sorted(metadata: &Metadata) -> BTreeMap<&String, &serde_json::Value> {
    metadata.iter().collect()
}

fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
