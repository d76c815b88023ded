//! Resolution of loosely specified colors into device RGB.

use crate::color::Component;
use crate::error::{ColorError, Result};
use crate::models::{Rgb, Rgb01};
use crate::palettes::{ufz, x11};

/// A color given in any of the accepted input forms: a color name, a hex
/// string, or an explicit RGB triple.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// An X11 or UFZ color name, or a `#rrggbb` hex string.
    Name(String),
    /// An explicit device color.
    Rgb(Rgb),
    /// An explicit unit-interval color.
    Rgb01(Rgb01),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<Rgb> for ColorInput {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Rgb01> for ColorInput {
    fn from(value: Rgb01) -> Self {
        Self::Rgb01(value)
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::Rgb(Rgb::new(value.0, value.1, value.2))
    }
}

impl From<(Component, Component, Component)> for ColorInput {
    fn from(value: (Component, Component, Component)) -> Self {
        Self::Rgb01(Rgb01::new(value.0, value.1, value.2))
    }
}

impl ColorInput {
    /// Resolve this input to a device color. Names are matched
    /// case-insensitively against the X11 table first and the UFZ table
    /// second; strings starting with `#` are parsed as hex.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Self::Rgb(rgb) => Ok(*rgb),
            Self::Rgb01(rgb01) => Ok(rgb01.to_rgb()),
            Self::Name(name) => {
                if name.starts_with('#') {
                    return Rgb::from_hex(name);
                }
                let lower = name.to_lowercase();
                if let Some(hex) = x11::lookup(&lower) {
                    return Rgb::from_hex(hex);
                }
                if let Some(rgb) = ufz::lookup(&lower) {
                    return Ok(rgb);
                }
                Err(ColorError::InvalidInput {
                    message: format!("cannot interpret color: {name}"),
                })
            }
        }
    }

    /// Resolve this input to a unit-interval color.
    pub fn to_rgb01(&self) -> Result<Rgb01> {
        match self {
            Self::Rgb01(rgb01) => Ok(*rgb01),
            _ => Ok(self.to_rgb()?.to_rgb01()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_through_the_x11_table() {
        assert_eq!(
            ColorInput::from("teal").to_rgb().unwrap(),
            Rgb::new(0, 128, 128)
        );
        assert_eq!(
            ColorInput::from("DarkRed").to_rgb().unwrap(),
            Rgb::new(139, 0, 0)
        );
    }

    #[test]
    fn prefixed_ufz_names_resolve() {
        assert_eq!(
            ColorInput::from("ufzdarkblue").to_rgb().unwrap(),
            Rgb::new(0, 62, 110)
        );
    }

    #[test]
    fn bare_names_prefer_the_x11_table() {
        // "blue" exists in both tables; X11 wins.
        assert_eq!(
            ColorInput::from("blue").to_rgb().unwrap(),
            Rgb::new(0, 0, 255)
        );
    }

    #[test]
    fn hex_strings_and_triples_resolve() {
        assert_eq!(
            ColorInput::from("#0165c9").to_rgb().unwrap(),
            Rgb::new(1, 101, 201)
        );
        assert_eq!(
            ColorInput::from((1u8, 101u8, 201u8)).to_rgb().unwrap(),
            Rgb::new(1, 101, 201)
        );
        let rgb01 = ColorInput::from((1.0, 0.0, 0.0)).to_rgb01().unwrap();
        assert_eq!(rgb01, Rgb01::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(ColorInput::from("not_a_color").to_rgb().is_err());
    }
}
