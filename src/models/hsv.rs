//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;
use crate::models::rgb::{Rgb, Rgb01};

colorramp_macros::gen_model! {
    /// A color specified with the HSV notation.
    pub struct Hsv {
        /// The hue angle in degrees, in [0, 360). Zero when the color is
        /// achromatic. Note the asymmetry with HSL, which reports NaN.
        hue: Component,
        /// The saturation component in [0, 1].
        saturation: Component,
        /// The value component in [0, 1].
        value: Component,
    }
}

impl Rgb {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let r = Component::from(self.red);
        let g = Component::from(self.green);
        let b = Component::from(self.blue);

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;
        let value = max / 255.0;

        if delta == 0.0 {
            return Hsv::new(0.0, 0.0, value);
        }

        let saturation = delta / max;
        let mut hue = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsv::new(hue, saturation, value)
    }
}

impl Hsv {
    /// Convert this color to device RGB. Channels are rounded to the nearest
    /// integer.
    pub fn to_rgb(&self) -> Rgb {
        let s = self.saturation;
        let v = self.value * 255.0;

        let (r, g, b) = if s == 0.0 {
            (v, v, v)
        } else {
            let mut h = self.hue;
            if h == 360.0 {
                h = 0.0;
            } else if h > 360.0 {
                h -= 360.0;
            } else if h < 0.0 {
                h += 360.0;
            }
            h /= 60.0;

            let i = h.floor();
            let f = h - i;
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));

            match i as i32 {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        Rgb::new(r.round() as u8, g.round() as u8, b.round() as u8)
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
    fn round_trips_through_hsv() {
        for c in [
            Rgb::new(1, 101, 201),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 128, 255),
            Rgb::new(250, 2, 60),
        ] {
            assert_eq!(c.to_hsv().to_rgb(), c, "{c:?}");
        }
    }

    #[test]
    fn round_trips_on_a_channel_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let c = Rgb::new(r, g, b);
                    assert_eq!(c.to_hsv().to_rgb(), c, "{c:?}");
                }
            }
        }
    }

    #[test]
    fn achromatic_hue_is_zero() {
        let hsv = Rgb::new(77, 77, 77).to_hsv();
        assert_eq!(hsv.hue, 0.0);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.to_rgb(), Rgb::new(77, 77, 77));
    }

    #[test]
    fn hue_wraps_at_360_degrees() {
        let a = Hsv::new(360.0, 1.0, 1.0).to_rgb();
        let b = Hsv::new(0.0, 1.0, 1.0).to_rgb();
        assert_eq!(a, b);
    }
}
