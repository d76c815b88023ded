//! Model a color in the CIE L*a*b* color space and its cylindrical LCh form,
//! under the D65 illuminant.

use crate::color::{Component, Components};
use crate::math::{limit, transform, transform_3x3, Transform};
use crate::models::rgb::{Rgb, Rgb01};

/// The D65 standard referent.
const WHITE: Components = Components(0.950470, 1.0, 1.088830);

// The sRGB gamma breakpoints differ between the two directions; 0.03928
// matches the WCAG relative-luminance definition and inverts to 0.00304.
const EXPAND_BREAK: Component = 0.03928;
const COMPRESS_BREAK: Component = 0.00304;

const LAB_EPSILON: Component = 0.008856;
const LAB_EPSILON_INV: Component = 0.206893034;
const LAB_SLOPE: Component = 7.787037;
const LAB_OFFSET: Component = 4.0 / 29.0;

colorramp_macros::gen_model! {
    /// A color specified in the CIE L*a*b* color space, the rectangular
    /// orthogonal form.
    pub struct Lab {
        /// The lightness component, in [0, 100].
        lightness: Component,
        /// The a (green to red) opponent axis.
        a: Component,
        /// The b (blue to yellow) opponent axis.
        b: Component,
    }
}

colorramp_macros::gen_model! {
    /// A color specified in the CIE L*a*b* color space, the cylindrical
    /// polar form.
    pub struct Lch {
        /// The lightness component, in [0, 100].
        lightness: Component,
        /// The chroma component, the distance from the neutral axis.
        chroma: Component,
        /// The hue angle in degrees, as returned by `atan2`.
        hue: Component,
    }
}

fn expand(v: u8) -> Component {
    let v = Component::from(v) / 255.0;
    if v <= EXPAND_BREAK {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn xyz_to_lab(v: Component) -> Component {
    if v > LAB_EPSILON {
        v.cbrt()
    } else {
        LAB_SLOPE * v + LAB_OFFSET
    }
}

fn lab_to_xyz(v: Component) -> Component {
    if v > LAB_EPSILON_INV {
        v * v * v
    } else {
        (v - LAB_OFFSET) / LAB_SLOPE
    }
}

fn compress(v: Component) -> Component {
    if v <= COMPRESS_BREAK {
        255.0 * (12.92 * v)
    } else {
        255.0 * (1.055 * v.powf(1.0 / 2.4) - 0.055)
    }
}

impl Rgb {
    /// Convert this color to CIE L*a*b*.
    pub fn to_lab(&self) -> Lab {
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339, //
            0.3575761, 0.7151522, 0.1191920, //
            0.1804375, 0.0721750, 0.9503041, //
        );

        let linear = Components(expand(self.red), expand(self.green), expand(self.blue));
        let xyz = transform(&TO_XYZ, linear);

        let x = xyz_to_lab(xyz.0 / WHITE.0);
        let y = xyz_to_lab(xyz.1 / WHITE.1);
        let z = xyz_to_lab(xyz.2 / WHITE.2);

        Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }

    /// Convert this color to LCh.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_lch()
    }
}

impl Lab {
    /// Convert this rectangular form into its cylindrical polar form.
    pub fn to_lch(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = self.b.atan2(self.a).to_degrees();
        Lch::new(self.lightness, chroma, hue)
    }

    /// Convert this color to device RGB. Channels are rounded to the nearest
    /// integer and clamped to [0, 255].
    pub fn to_rgb(&self) -> Rgb {
        const FROM_XYZ: Transform = transform_3x3(
            3.2404542, -0.9692660, 0.0556434, //
            -1.5371385, 1.8760108, -0.2040259, //
            -0.4985314, 0.0415560, 1.0572252, //
        );

        let y = (self.lightness + 16.0) / 116.0;
        let x = y + self.a / 500.0;
        let z = y - self.b / 200.0;

        let xyz = Components(
            lab_to_xyz(x) * WHITE.0,
            lab_to_xyz(y) * WHITE.1,
            lab_to_xyz(z) * WHITE.2,
        );
        let rgb = transform(&FROM_XYZ, xyz);

        let channel = |v: Component| limit(compress(v).round(), 0.0, 255.0) as u8;
        Rgb::new(channel(rgb.0), channel(rgb.1), channel(rgb.2))
    }

    /// Convert this color to unit-interval RGB, via the rounded device color.
    pub fn to_rgb01(&self) -> Rgb01 {
        self.to_rgb().to_rgb01()
    }
}

impl Lch {
    /// Convert this cylindrical polar form into its rectangular form.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians();
        Lab::new(self.lightness, hue.cos() * self.chroma, hue.sin() * self.chroma)
    }

    /// Convert this color to device RGB.
    pub fn to_rgb(&self) -> Rgb {
        self.to_lab().to_rgb()
    }

    /// Convert this color to unit-interval RGB, via the rounded device color.
    pub fn to_rgb01(&self) -> Rgb01 {
        self.to_rgb().to_rgb01()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn round_trips_through_lab() {
        for c in [
            Rgb::new(1, 101, 201),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(210, 45, 18),
        ] {
            assert_eq!(c.to_lab().to_rgb(), c, "{c:?}");
        }
    }

    #[test]
    fn round_trips_through_lch() {
        for c in [
            Rgb::new(1, 101, 201),
            Rgb::new(139, 0, 0),
            Rgb::new(0, 128, 128),
        ] {
            assert_eq!(c.to_lch().to_rgb(), c, "{c:?}");
        }
    }

    #[test]
    fn round_trips_on_a_channel_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let c = Rgb::new(r, g, b);
                    assert_eq!(c.to_lab().to_rgb(), c, "{c:?}");
                    assert_eq!(c.to_lch().to_rgb(), c, "{c:?}");
                }
            }
        }
    }

    #[test]
    fn white_has_full_lightness_and_no_chroma() {
        let lab = Rgb::new(255, 255, 255).to_lab();
        assert_component_eq!(lab.lightness, 100.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn lch_is_the_polar_form_of_lab() {
        let lab = Lab::new(52.0, 30.0, -40.0);
        let lch = lab.to_lch();
        assert_component_eq!(lch.chroma, (30.0 as Component).hypot(-40.0));
        let back = lch.to_lab();
        assert_component_eq!(back.lightness, lab.lightness);
        assert_component_eq!(back.a, lab.a);
        assert_component_eq!(back.b, lab.b);
    }

    #[test]
    fn hue_keeps_the_atan2_sign() {
        let lch = Lab::new(50.0, 10.0, -10.0).to_lch();
        assert!(lch.hue < 0.0);
    }
}
