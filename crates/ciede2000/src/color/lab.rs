//! CIELAB color space (D65 reference white)
//!
//! CIELAB is the approximately perceptually uniform space in which the
//! CIEDE2000 formula operates.

use super::linear_rgb::LinearRgb;
use super::srgb::{Rgb8, Srgb8};
use super::xyz::Xyz;

/// D65 reference white on the 0..=100 tristimulus scale
const D65_XN: f64 = 95.047;
const D65_YN: f64 = 100.000;
const D65_ZN: f64 = 108.883;

/// Below this normalized tristimulus value the companding curve is linear.
const EPSILON: f64 = 0.008856;
const KAPPA_SLOPE: f64 = 7.787;

/// A color in CIELAB.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, roughly -150.0..=150.0
/// - `b`: Blue-yellow axis, roughly -150.0..=150.0
///
/// Components are not clamped or validated. NaN in any component propagates
/// to NaN through [`Lab::delta_e`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    ///
    /// # Example
    ///
    /// ```
    /// use ciede2000::Lab;
    ///
    /// let gray = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(gray.chroma(), 0.0);
    /// ```
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert an 8-bit sRGB color: gamma decode, tristimulus matrix, then
    /// CIE companding against D65.
    ///
    /// # Example
    ///
    /// ```
    /// use ciede2000::Lab;
    ///
    /// let white = Lab::from_rgb(&[255u8, 255, 255]);
    /// assert!((white.l - 100.0).abs() < 1e-9);
    /// ```
    pub fn from_rgb<C: Rgb8 + ?Sized>(color: &C) -> Self {
        Self::from_xyz(Xyz::from(LinearRgb::from_rgb(color)))
    }

    pub(crate) fn from_xyz(xyz: Xyz) -> Self {
        let fx = compand(xyz.x / D65_XN);
        let fy = compand(xyz.y / D65_YN);
        let fz = compand(xyz.z / D65_ZN);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Classical CIELAB chroma, `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIEDE2000 difference to `other`. See [`ciede2000`](crate::ciede2000).
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        crate::difference::ciede2000(self, other)
    }
}

impl From<Srgb8> for Lab {
    fn from(srgb: Srgb8) -> Self {
        Self::from_rgb(&srgb)
    }
}

/// CIE nonlinear response for one normalized tristimulus axis.
#[inline]
fn compand(v: f64) -> f64 {
    if v > EPSILON {
        v.cbrt()
    } else {
        KAPPA_SLOPE * v + 16.0 / 116.0
    }
}
