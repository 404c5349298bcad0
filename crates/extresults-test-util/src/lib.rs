//! Shared test utilities for the extresults workspace.
//!
//! Lives in its own crate so the CLI integration tests and the fuzz harness can
//! share it without reaching into `#[cfg(test)]` code.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the root object is
/// a receipt envelope (has `schema`, `tool`, `verdict`, `results` and
/// `diagnostics`). Timestamp keys are normalized at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "results", "diagnostics"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
