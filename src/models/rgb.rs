//! Device color in the sRGB color space, with 8-bit or unit-interval
//! channels.

use crate::color::Component;
use crate::error::{ColorError, Result};
use crate::math::limit;

/// A device color with three 8-bit channels. This is the canonical integer
/// representation; every other model converts to and from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

colorramp_macros::gen_model! {
    /// A device color with unit-interval channels, [`Rgb`] scaled by 1/255.
    pub struct Rgb01 {
        /// The red channel in [0, 1].
        red: Component,
        /// The green channel in [0, 1].
        green: Component,
        /// The blue channel in [0, 1].
        blue: Component,
    }
}

impl Rgb {
    /// Create a new device color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Scale the channels into the unit interval.
    pub fn to_rgb01(&self) -> Rgb01 {
        Rgb01::new(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        )
    }

    /// Format this color as a lowercase `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parse a `#rrggbb` hex string. Both hex digit cases are accepted.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidInput {
            message: format!("not a #rrggbb hex color: {hex}"),
        };

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// The WCAG relative luminance of this color, in [0, 1].
    pub fn luminance(&self) -> Component {
        fn linear(v: u8) -> Component {
            let v = Component::from(v) / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.red) + 0.7152 * linear(self.green) + 0.0722 * linear(self.blue)
    }
}

impl Rgb01 {
    /// Quantize the channels to 8 bits, rounding to the nearest integer.
    /// Out-of-range channels are clamped.
    pub fn to_rgb(&self) -> Rgb {
        let channel = |v: Component| limit((v * 255.0).round(), 0.0, 255.0) as u8;
        Rgb::new(channel(self.red), channel(self.green), channel(self.blue))
    }
}
