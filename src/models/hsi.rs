//! Model a color with the HSI (hue, saturation, intensity) notation.

use crate::color::Component;
use crate::math::limit;
use crate::models::rgb::{Rgb, Rgb01};

const TAU: Component = std::f64::consts::TAU as Component;
const FRAC_PI_3: Component = std::f64::consts::FRAC_PI_3 as Component;

colorramp_macros::gen_model! {
    /// A color specified with the HSI notation.
    pub struct Hsi {
        /// The hue angle in degrees, in [0, 360). Zero when the color is
        /// achromatic.
        hue: Component,
        /// The saturation component in [0, 1].
        saturation: Component,
        /// The intensity component in [0, 1], the mean of the RGB channels.
        intensity: Component,
    }
}

impl Rgb {
    /// Convert this color to the HSI notation.
    pub fn to_hsi(&self) -> Hsi {
        let r = Component::from(self.red) / 255.0;
        let g = Component::from(self.green) / 255.0;
        let b = Component::from(self.blue) / 255.0;

        let min = r.min(g).min(b);
        let intensity = (r + g + b) / 3.0;
        let saturation = if intensity == 0.0 {
            0.0
        } else {
            // Rounding can push 1 - min/intensity a few ulps outside [0, 1]
            // for grey inputs.
            limit(1.0 - min / intensity, 0.0, 1.0)
        };

        let numerator = ((r - g) + (r - b)) / 2.0;
        let denominator = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
        let hue = if saturation == 0.0 || denominator == 0.0 {
            0.0
        } else {
            let mut hue = (numerator / denominator).acos();
            if b > g {
                hue = TAU - hue;
            }
            hue / TAU * 360.0
        };

        Hsi::new(hue, saturation, intensity)
    }
}

impl Hsi {
    /// Convert this color to device RGB. Channels are rounded to the nearest
    /// integer, not truncated.
    pub fn to_rgb(&self) -> Rgb {
        fn f(x: Component, s: Component) -> Component {
            (1.0 + s * (TAU * x).cos() / (FRAC_PI_3 - TAU * x).cos()) / 3.0
        }

        let s = self.saturation;
        let h = self.hue / 360.0;

        // Three 120-degree sectors; each reconstructs one dark channel.
        let (r, g, b) = if h < 1.0 / 3.0 {
            let b = (1.0 - s) / 3.0;
            let r = f(h, s);
            (r, 1.0 - (b + r), b)
        } else if h < 2.0 / 3.0 {
            let h = h - 1.0 / 3.0;
            let r = (1.0 - s) / 3.0;
            let g = f(h, s);
            (r, g, 1.0 - (r + g))
        } else {
            let h = h - 2.0 / 3.0;
            let g = (1.0 - s) / 3.0;
            let b = f(h, s);
            (1.0 - (g + b), g, b)
        };

        let i = self.intensity;
        let channel = |v: Component| (limit(i * v * 3.0, 0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(channel(r), channel(g), channel(b))
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
    fn round_trips_through_hsi() {
        for c in [
            Rgb::new(1, 101, 201),
            Rgb::new(255, 0, 0),
            Rgb::new(12, 255, 0),
            Rgb::new(240, 240, 17),
        ] {
            assert_eq!(c.to_hsi().to_rgb(), c, "{c:?}");
        }
    }

    #[test]
    fn round_trips_on_a_channel_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let c = Rgb::new(r, g, b);
                    assert_eq!(c.to_hsi().to_rgb(), c, "{c:?}");
                }
            }
        }
    }

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        let hsi = Rgb::new(128, 128, 128).to_hsi();
        assert_eq!(hsi.hue, 0.0);
        assert_eq!(hsi.saturation, 0.0);

        let hsi = Rgb::new(0, 0, 0).to_hsi();
        assert_eq!(hsi.saturation, 0.0);
        assert_eq!(hsi.intensity, 0.0);
    }

    #[test]
    fn the_sector_boundary_is_total() {
        // Exactly 240 degrees lands on the upper sector.
        let c = Hsi::new(240.0, 0.5, 0.4).to_rgb();
        assert!(c.red <= c.blue);
    }
}
