//! colorramp provides color conversion primitives and perceptual color-ramp
//! generation for scientific plotting.
//!
//! Device RGB ([`Rgb`], [`Rgb01`]) converts to and from hex strings, HSI,
//! HSL, HSV, CIE L*a*b* and LCh. The [`bezier`] interpolator builds smooth
//! color maps through up to five control colors in L*a*b* or LCh space;
//! [`blend`], [`range`] and [`gradient`] interpolate linearly in RGB. Named
//! palettes (Brewer, SRON, UFZ, X11) live in [`palettes`].
//!
//! ```rust
//! use colorramp::{bezier, palettes, BezierOptions};
//!
//! let ramp = bezier(&["black", "red", "yellow", "white"], 7, &BezierOptions::default())?;
//! assert_eq!(ramp.len(), 7);
//!
//! let blues = palettes::get("blues4")?;
//! assert_eq!(blues.len(), 4);
//! # Ok::<(), colorramp::ColorError>(())
//! ```

#![deny(missing_docs)]

mod bezier;
mod blend;
mod color;
mod convert;
mod error;
mod math;
mod models;
pub mod palettes;

#[cfg(test)]
mod test;

pub use bezier::{bezier, BezierOptions};
pub use blend::{blend, gradient, range};
pub use color::{Component, Components};
pub use convert::ColorInput;
pub use error::{ColorError, Result};
pub use math::limit;
pub use models::{Hsi, Hsl, Hsv, Lab, Lch, Rgb, Rgb01};
