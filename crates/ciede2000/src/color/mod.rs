//! Color types and the sRGB → XYZ → LAB conversion chain
//!
//! # Color Spaces
//!
//! - [`Srgb8`] (or any [`Rgb8`]): gamma-encoded 8-bit input
//! - [`LinearRgb`]: linear light, required by the tristimulus matrix
//! - XYZ: crate-private tristimulus intermediate
//! - [`Lab`]: CIELAB under D65, where color differences are measured
//!
//! # Example
//!
//! ```
//! use ciede2000::{Lab, Srgb8};
//!
//! let orange = Lab::from(Srgb8::new(255, 128, 0));
//! assert!(orange.a > 0.0 && orange.b > 0.0);
//! ```

mod error;
mod lab;
mod linear_rgb;
mod srgb;
mod xyz;

pub use error::{Channel, ChannelError};
pub use lab::Lab;
pub use linear_rgb::{linearize, LinearRgb};
pub use srgb::{Rgb8, Srgb8};
