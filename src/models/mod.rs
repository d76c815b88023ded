//! Each color notation is modeled with its own type. Conversions are only
//! implemented on relevant models, keeping conversion paths accurate.
//!
//! [`Rgb`] is the canonical integer representation; converting any model to
//! device RGB rounds to the nearest 8-bit channel value.

pub mod hsi;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod rgb;

pub use hsi::Hsi;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{Lab, Lch};
pub use rgb::{Rgb, Rgb01};
