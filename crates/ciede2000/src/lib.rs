//! ciede2000: perceptual color difference between sRGB colors
//!
//! Computes the CIEDE2000 color difference (ΔE00) between two 8-bit sRGB
//! colors. A value near 1.0 is a just noticeable difference.
//!
//! # Quick Start
//!
//! ```
//! use ciede2000::{distance, Srgb8};
//!
//! let black = Srgb8::new(0, 0, 0);
//! let white = Srgb8::new(255, 255, 255);
//! let de = distance(&black, &white);
//! assert!((de - 100.0).abs() < 1e-3);
//! ```
//!
//! Any type implementing [`Rgb8`] can be compared directly, including
//! `[u8; 3]` and `(u8, u8, u8)`:
//!
//! ```
//! use ciede2000::distance;
//!
//! let de = distance(&[255u8, 0, 0], &(250u8, 5u8, 5u8));
//! assert!(de > 0.0 && de < 5.0);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Rgb8 (gamma-encoded, 0..=255)
//!     |
//!     v
//! LinearRgb      (IEC 61966-2-1 inverse transfer, per channel)
//!     |
//!     v
//! XYZ            (fixed sRGB/D65 matrix, 0..=100 scale)
//!     |
//!     v
//! Lab            (CIE companding against the D65 white point)
//!     |
//!     v
//! ciede2000()    (lightness, chroma, hue terms + blue-region rotation)
//! ```
//!
//! Every stage is a pure function on small `Copy` values: no allocation,
//! no shared state, safe to call from any number of threads.
//!
//! # Boundary Conditions
//!
//! [`distance`] trusts its input. 8-bit channels are always in range, so
//! the result is always finite and non-negative. [`ciede2000`] on
//! hand-built [`Lab`] values does not validate them: NaN or infinite
//! components produce NaN. Hosts holding wider integers can use the checked
//! `TryFrom` conversions on [`Srgb8`], which report a [`ChannelError`].

pub mod color;
pub mod difference;
pub mod reference;


pub use color::{Channel, ChannelError, Lab, LinearRgb, Rgb8, Srgb8};
pub use difference::ciede2000;
pub use reference::{ReferencePair, SHARMA_2005};

/// CIEDE2000 difference between two 8-bit sRGB colors (D65, kL=kC=kH=1).
///
/// Each color is converted to CIELAB independently, then both are fed to
/// [`ciede2000`]. Symmetric in its arguments and zero when both colors have
/// the same channels.
#[inline]
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: Rgb8 + ?Sized,
    B: Rgb8 + ?Sized,
{
    ciede2000(Lab::from_rgb(a), Lab::from_rgb(b))
}
