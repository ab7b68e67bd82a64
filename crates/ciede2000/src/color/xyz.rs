//! CIE XYZ tristimulus values
//!
//! Only an intermediate of the LAB conversion, so the type stays private to
//! the crate.

use super::linear_rgb::LinearRgb;

/// Tristimulus value on the 0..=100 scale (Y = 100 for reference white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<LinearRgb> for Xyz {
    /// Apply the sRGB primaries / D65 white matrix.
    fn from(rgb: LinearRgb) -> Self {
        let r = rgb.r * 100.0;
        let g = rgb.g * 100.0;
        let b = rgb.b * 100.0;

        Self {
            x: 0.4124 * r + 0.3576 * g + 0.1805 * b,
            y: 0.2126 * r + 0.7152 * g + 0.0722 * b,
            z: 0.0193 * r + 0.1192 * g + 0.9505 * b,
        }
    }
}
