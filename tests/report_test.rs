//! Integration tests for the command reports built on the ciede2000 crate.

mod common;

use ciede2000::{distance, Lab, SHARMA_2005};
use common::fixtures::{colors, FULL_CONFIG};
use common::{assert_close, assert_keys, parse_json, write_config};
use deltae::config::{AppConfig, Thresholds};
use deltae::report::{render_color, Comparison, OutputFormat, Perception, VerifyReport};
use pretty_assertions::assert_eq;

#[test]
fn test_comparison_matches_library_distance() {
    let comparison = Comparison::new(colors::RED, colors::BLUE, &Thresholds::default());
    assert_eq!(comparison.delta_e, distance(&colors::RED, &colors::BLUE));
    assert_close(comparison.delta_e, 52.878674, 1e-5);
    assert_eq!(comparison.perception, Perception::Opposite);
}

#[test]
fn test_comparison_is_symmetric() {
    let thresholds = Thresholds::default();
    let forward = Comparison::new(colors::MID_GRAY, colors::RED, &thresholds);
    let backward = Comparison::new(colors::RED, colors::MID_GRAY, &thresholds);
    assert_close(forward.delta_e, backward.delta_e, 1e-12);
    assert_eq!(forward.first, backward.second);
}

#[test]
fn test_black_white_json_report() {
    let comparison = Comparison::new(colors::BLACK, colors::WHITE, &Thresholds::default());
    let value = parse_json(&comparison.render(OutputFormat::Json, 4).unwrap());

    assert_keys(&value, &["delta_e", "first", "perception", "second"]);
    assert_keys(&value["first"], &["lab", "rgb"]);
    assert_close(value["delta_e"].as_f64().unwrap(), 100.0, 1e-3);
    assert_eq!(value["perception"], "opposite");
    assert_close(value["second"]["lab"]["l"].as_f64().unwrap(), 100.0, 1e-9);
}

#[test]
fn test_near_colors_text_report() {
    let comparison = Comparison::new(colors::RED, colors::NEAR_RED, &Thresholds::default());
    let text = comparison.render(OutputFormat::Text, 3).unwrap();

    assert!(text.starts_with("first:  rgb(255, 0, 0)"), "{text}");
    assert!(text.contains("second: rgb(250, 5, 5)"), "{text}");
    assert!(
        text.ends_with("ΔE00:   1.054 (perceptible through close observation)"),
        "{text}"
    );
}

#[test]
fn test_lab_report_json_matches_conversion() {
    let value = parse_json(&render_color(colors::RED, OutputFormat::Json, 4).unwrap());
    let lab = Lab::from(colors::RED);

    assert_eq!(value["rgb"], serde_json::json!([255, 0, 0]));
    assert_close(value["lab"]["l"].as_f64().unwrap(), lab.l, 1e-12);
    assert_close(value["lab"]["a"].as_f64().unwrap(), lab.a, 1e-12);
    assert_close(value["lab"]["b"].as_f64().unwrap(), lab.b, 1e-12);
}

#[test]
fn test_verify_report_json_shape() {
    let report = VerifyReport::run(&SHARMA_2005, 1e-4);
    let value = parse_json(&report.render(OutputFormat::Json, 4).unwrap());

    assert_keys(&value, &["failures", "max_error", "pairs", "tolerance"]);
    assert_eq!(value["failures"], 0);
    assert_eq!(value["pairs"].as_array().unwrap().len(), 34);
    assert_keys(
        &value["pairs"][0],
        &["actual", "error", "expected", "pair", "passed"],
    );
}

#[test]
fn test_verify_report_text_summary() {
    let report = VerifyReport::run(&SHARMA_2005, 1e-4);
    let text = report.render(OutputFormat::Text, 4).unwrap();

    assert!(text.starts_with("pair  expected"), "{text}");
    assert!(text.contains("34 of 34 pairs within 1e-4"), "{text}");
    assert!(!text.contains("FAIL"));
}

#[test]
fn test_verify_report_with_impossible_tolerance_fails() {
    // Published values are rounded to 4 decimals, so a 1e-9 tolerance
    // cannot hold for every pair
    let report = VerifyReport::run(&SHARMA_2005, 1e-9);
    assert!(!report.passed());
    assert!(report.failures > 0);
}

#[test]
fn test_verify_with_strict_config_tolerance_is_error() {
    let (_dir, path) = write_config("verify_tolerance: 1e-9\n");
    let config = AppConfig::load(Some(&path)).unwrap();

    let report = VerifyReport::run(&SHARMA_2005, config.verify_tolerance);
    let failures = report.failures;
    let err = report.into_result().unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("{failures} of 34 reference pairs exceed tolerance 1e-9")
    );
}

#[test]
fn test_verify_with_full_config_tolerance_succeeds() {
    let (_dir, path) = write_config(FULL_CONFIG);
    let config = AppConfig::load(Some(&path)).unwrap();

    let report = VerifyReport::run(&SHARMA_2005, config.verify_tolerance)
        .into_result()
        .unwrap();
    assert!(report.max_error < config.verify_tolerance);
}
