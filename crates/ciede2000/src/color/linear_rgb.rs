//! Linear RGB and the sRGB gamma decode
//!
//! Linear RGB is proportional to light intensity. The tristimulus matrix is
//! only valid on linear values, so every channel is decoded here first.

use super::srgb::Rgb8;

/// Channels at or below this normalized value sit on the linear toe of the
/// sRGB transfer curve.
const LINEAR_THRESHOLD: f64 = 0.04045;

/// Decode one 8-bit gamma-encoded channel into linear light (IEC 61966-2-1).
///
/// # Example
/// ```
/// use ciede2000::color::linearize;
/// assert_eq!(linearize(0), 0.0);
/// assert!((linearize(255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v > LINEAR_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// A color in linear RGB, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode any 8-bit sRGB color, channel by channel.
    #[inline]
    pub fn from_rgb<C: Rgb8 + ?Sized>(color: &C) -> Self {
        Self {
            r: linearize(color.red()),
            g: linearize(color.green()),
            b: linearize(color.blue()),
        }
    }
}

impl From<super::Srgb8> for LinearRgb {
    fn from(srgb: super::Srgb8) -> Self {
        Self::from_rgb(&srgb)
    }
}
