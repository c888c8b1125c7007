// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line diffs of sample lists with timestamps stripped.

use similar::TextDiff;

/// Render a unified diff between two sample lists.
///
/// Each element becomes one line of compact JSON with keys sorted and any
/// top-level `timestamp` removed, so only differences that the comparison
/// cares about show up. Returns an empty string when the lists render the same.
pub fn render_diff(a: &[serde_json::Value], b: &[serde_json::Value], context: usize) -> String {
    let left = render_lines(a);
    let right = render_lines(b);
    TextDiff::from_lines(&left, &right)
        .unified_diff()
        .context_radius(context)
        .header("left", "right")
        .to_string()
}

fn render_lines(values: &[serde_json::Value]) -> String {
    values
        .iter()
        .map(|value| format!("{}\n", strip_timestamp(value)))
        .collect()
}

fn strip_timestamp(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut map = map.clone();
            map.remove("timestamp");
            serde_json::Value::Object(map)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
