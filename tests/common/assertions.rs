//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use serde_json::Value;

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "Expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Parse rendered JSON output, failing the test with the raw text on error
pub fn parse_json(rendered: &str) -> Value {
    serde_json::from_str(rendered)
        .unwrap_or_else(|e| panic!("Output is not valid JSON ({e}):\n{rendered}"))
}

/// Assert a JSON object has exactly the given top-level keys
pub fn assert_keys(value: &Value, expected: &[&str]) {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("Expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();

    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}
