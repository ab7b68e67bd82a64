//! 8-bit sRGB input colors
//!
//! The distance pipeline reads three gamma-encoded 8-bit channels from
//! whatever color type the caller already has. [`Rgb8`] is that seam;
//! [`Srgb8`] is the crate's own plain implementation of it.

use super::error::{Channel, ChannelError};

/// Read access to the red, green and blue channels of an 8-bit sRGB color.
///
/// Implement this for a host color type to pass it straight to
/// [`distance`](crate::distance). Any alpha channel the type carries is
/// never consulted.
///
/// # Example
///
/// ```
/// use ciede2000::{distance, Rgb8};
///
/// struct Pixel {
///     rgba: [u8; 4],
/// }
///
/// impl Rgb8 for Pixel {
///     fn red(&self) -> u8 { self.rgba[0] }
///     fn green(&self) -> u8 { self.rgba[1] }
///     fn blue(&self) -> u8 { self.rgba[2] }
/// }
///
/// let opaque = Pixel { rgba: [200, 40, 40, 255] };
/// let clear = Pixel { rgba: [200, 40, 40, 0] };
/// assert_eq!(distance(&opaque, &clear), 0.0);
/// ```
pub trait Rgb8 {
    fn red(&self) -> u8;
    fn green(&self) -> u8;
    fn blue(&self) -> u8;
}

impl<T: Rgb8 + ?Sized> Rgb8 for &T {
    #[inline]
    fn red(&self) -> u8 {
        (**self).red()
    }

    #[inline]
    fn green(&self) -> u8 {
        (**self).green()
    }

    #[inline]
    fn blue(&self) -> u8 {
        (**self).blue()
    }
}

impl Rgb8 for [u8; 3] {
    #[inline]
    fn red(&self) -> u8 {
        self[0]
    }

    #[inline]
    fn green(&self) -> u8 {
        self[1]
    }

    #[inline]
    fn blue(&self) -> u8 {
        self[2]
    }
}

impl Rgb8 for (u8, u8, u8) {
    #[inline]
    fn red(&self) -> u8 {
        self.0
    }

    #[inline]
    fn green(&self) -> u8 {
        self.1
    }

    #[inline]
    fn blue(&self) -> u8 {
        self.2
    }
}

/// A gamma-encoded sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Srgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Srgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Narrow 16-bit channels (0..=65535) to 8 bits, rounding to nearest.
    ///
    /// Many host color APIs report channels scaled to a 16-bit range.
    /// Feeding those values to the 8-bit pipeline without narrowing
    /// them first would push every channel far past 1.0 after normalization.
    ///
    /// # Example
    /// ```
    /// use ciede2000::Srgb8;
    /// assert_eq!(Srgb8::from_rgb16(0xFFFF, 0x8080, 0), Srgb8::new(255, 128, 0));
    /// ```
    #[inline]
    pub fn from_rgb16(r: u16, g: u16, b: u16) -> Self {
        Self::new(narrow16(r), narrow16(g), narrow16(b))
    }
}

#[inline]
fn narrow16(v: u16) -> u8 {
    // (v + 128) / 257 never exceeds 255 for v <= 65535
    ((v as u32 + 128) / 257) as u8
}

fn checked_channel(channel: Channel, value: i32) -> Result<u8, ChannelError> {
    u8::try_from(value).map_err(|_| ChannelError::OutOfRange { channel, value })
}

impl TryFrom<[i32; 3]> for Srgb8 {
    type Error = ChannelError;

    fn try_from(channels: [i32; 3]) -> Result<Self, Self::Error> {
        Ok(Self::new(
            checked_channel(Channel::Red, channels[0])?,
            checked_channel(Channel::Green, channels[1])?,
            checked_channel(Channel::Blue, channels[2])?,
        ))
    }
}

impl TryFrom<(i32, i32, i32)> for Srgb8 {
    type Error = ChannelError;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::try_from([r, g, b])
    }
}

impl From<[u8; 3]> for Srgb8 {
    #[inline]
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Rgb8 for Srgb8 {
    #[inline]
    fn red(&self) -> u8 {
        self.r
    }

    #[inline]
    fn green(&self) -> u8 {
        self.g
    }

    #[inline]
    fn blue(&self) -> u8 {
        self.b
    }
}
