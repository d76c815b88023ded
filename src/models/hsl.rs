//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;
use crate::models::rgb::{Rgb, Rgb01};

colorramp_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue angle in degrees, in [0, 360). NaN when the color is
        /// achromatic.
        hue: Component,
        /// The saturation component in [0, 1].
        saturation: Component,
        /// The lightness component in [0, 1].
        lightness: Component,
    }
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let r = Component::from(self.red) / 255.0;
        let g = Component::from(self.green) / 255.0;
        let b = Component::from(self.blue) / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl::new(Component::NAN, 0.0, lightness);
        }

        let saturation = if lightness < 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        };

        let mut hue = if r == max {
            (g - b) / (max - min)
        } else if g == max {
            2.0 + (b - r) / (max - min)
        } else {
            4.0 + (r - g) / (max - min)
        };
        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsl::new(hue, saturation, lightness)
    }
}

impl Hsl {
    /// Convert this color to device RGB. Channels are rounded to the nearest
    /// integer.
    pub fn to_rgb(&self) -> Rgb {
        if self.saturation == 0.0 {
            let v = (self.lightness * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let t2 = if self.lightness < 0.5 {
            self.lightness * (1.0 + self.saturation)
        } else {
            self.lightness + self.saturation - self.lightness * self.saturation
        };
        let t1 = 2.0 * self.lightness - t2;
        let h = self.hue / 360.0;

        let channel = |mut t3: Component| {
            if t3 < 0.0 {
                t3 += 1.0;
            } else if t3 > 1.0 {
                t3 -= 1.0;
            }
            let c = if 6.0 * t3 < 1.0 {
                t1 + (t2 - t1) * 6.0 * t3
            } else if 2.0 * t3 < 1.0 {
                t2
            } else if 3.0 * t3 < 2.0 {
                t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
            } else {
                t1
            };
            (c * 255.0).round() as u8
        };

        Rgb::new(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }

    /// Convert this color to unit-interval RGB, via the rounded device color.
    pub fn to_rgb01(&self) -> Rgb01 {
        self.to_rgb().to_rgb01()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_hsl() {
        for c in [
            Rgb::new(1, 101, 201),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(33, 113, 181),
        ] {
            assert_eq!(c.to_hsl().to_rgb(), c, "{c:?}");
        }
    }

    #[test]
    fn round_trips_on_a_channel_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let c = Rgb::new(r, g, b);
                    assert_eq!(c.to_hsl().to_rgb(), c, "{c:?}");
                }
            }
        }
    }

    #[test]
    fn achromatic_hue_is_nan() {
        for c in [Rgb::new(0, 0, 0), Rgb::new(128, 128, 128), Rgb::new(255, 255, 255)] {
            let hsl = c.to_hsl();
            assert!(hsl.hue.is_nan());
            assert_eq!(hsl.saturation, 0.0);
            assert_eq!(hsl.to_rgb(), c);
        }
    }
}
