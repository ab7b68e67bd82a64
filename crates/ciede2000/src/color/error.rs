//! Error types for checked color construction

use std::fmt;

use thiserror::Error;

/// One of the three sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Returned when a wide integer does not fit an 8-bit channel.
///
/// The distance pipeline itself never validates its input; this error only
/// comes from the checked constructors on [`Srgb8`](super::Srgb8).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("{channel} channel value {value} is outside 0..=255")]
    OutOfRange { channel: Channel, value: i32 },
}
