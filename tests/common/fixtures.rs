//! Test fixtures and constants.

use std::path::PathBuf;
use tempfile::TempDir;

/// Colors with well-known relationships
pub mod colors {
    use ciede2000::Srgb8;

    pub const BLACK: Srgb8 = Srgb8::new(0, 0, 0);
    pub const WHITE: Srgb8 = Srgb8::new(255, 255, 255);
    pub const MID_GRAY: Srgb8 = Srgb8::new(128, 128, 128);
    pub const RED: Srgb8 = Srgb8::new(255, 0, 0);
    pub const NEAR_RED: Srgb8 = Srgb8::new(250, 5, 5);
    pub const BLUE: Srgb8 = Srgb8::new(0, 0, 255);
}

/// A config file that overrides every field
pub const FULL_CONFIG: &str = r#"
precision: 6
verify_tolerance: 0.001
thresholds:
  imperceptible: 0.5
  close_observation: 1.5
  at_a_glance: 5.0
  distinct: 25.0
"#;

/// Write `content` to `deltae.yaml` inside a fresh temporary directory.
///
/// The directory is returned so it outlives the test body.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("deltae.yaml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
