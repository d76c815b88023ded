//! Interpolate between a set of colors using a Bezier spline in a
//! perceptual color space.
//!
//! Control colors are converted to CIE L*a*b* (or LCh on request) and the
//! Bezier curve is evaluated there, so hue and chroma blend smoothly while
//! lightness can be corrected to ramp linearly. The result converts back to
//! unit-interval RGB.

use crate::color::{Component, Components};
use crate::convert::ColorInput;
use crate::error::{ColorError, Result};
use crate::models::{Lab, Lch, Rgb, Rgb01};
use crate::palettes;

/// Options for [`bezier`] ramp generation.
#[derive(Clone, Debug)]
pub struct BezierOptions {
    /// Correct the Bezier parameter with a bisection search so that
    /// lightness varies linearly along the ramp.
    pub correct_lightness: bool,
    /// Reverse the generated ramp.
    pub reverse: bool,
    /// Interpolate in LCh instead of L*a*b*.
    pub lch: bool,
    /// Register the generated ramp under this name in the palette registry.
    pub register: Option<String>,
}

impl Default for BezierOptions {
    fn default() -> Self {
        Self {
            correct_lightness: true,
            reverse: false,
            lch: false,
            register: None,
        }
    }
}

/// Interpolate `n >= 2` colors through 1 to 5 control colors.
///
/// The control sequence is classified by its lightness profile: monotonic
/// lightness is *sequential*, a direction reversal is *diverging*. Sequential
/// sequences interpolate with a single Bezier curve of matching degree.
/// Diverging sequences of 3 or 5 colors split at the middle control color
/// into two independent halves and require an odd `n`; diverging sequences
/// of 4 colors are not supported.
pub fn bezier<C>(colors: &[C], n: usize, options: &BezierOptions) -> Result<Vec<Rgb01>>
where
    C: Clone + Into<ColorInput>,
{
    let controls = colors
        .iter()
        .map(|c| c.clone().into().to_rgb())
        .collect::<Result<Vec<_>>>()?;

    let mut ramp = interpolate(&controls, n, options.lch, options.correct_lightness)?;

    if options.reverse {
        ramp.reverse();
    }
    if let Some(name) = &options.register {
        palettes::register(name, &ramp);
    }

    Ok(ramp)
}

// Degree-1, -2 and -3 Bezier basis evaluation for a single component.

fn bezier2(c0: Component, c1: Component, t: Component) -> Component {
    (1.0 - t) * c0 + t * c1
}

fn bezier3(c0: Component, c1: Component, c2: Component, t: Component) -> Component {
    (1.0 - t) * (1.0 - t) * c0 + 2.0 * (1.0 - t) * t * c1 + t * t * c2
}

fn bezier4(
    c0: Component,
    c1: Component,
    c2: Component,
    c3: Component,
    t: Component,
) -> Component {
    (1.0 - t) * (1.0 - t) * (1.0 - t) * c0
        + 3.0 * (1.0 - t) * (1.0 - t) * t * c1
        + 3.0 * (1.0 - t) * t * t * c2
        + t * t * t * c3
}

/// Bisect the Bezier parameter until the interpolated lightness matches the
/// linear ramp `l0 + (l1 - l0) * t` within 0.01 L-units. The search polarity
/// flips when lightness decreases along the curve. At most 20 iterations.
fn correct_lightness(
    l0: Component,
    l1: Component,
    t: Component,
    lightness_at: impl Fn(Component) -> Component,
) -> Component {
    let decreasing = l0 > l1;
    let ideal = l0 + (l1 - l0) * t;

    let mut t = t;
    let (mut lo, mut hi) = (0.0, 1.0);
    let mut diff = lightness_at(t) - ideal;

    for _ in 0..20 {
        if diff.abs() <= 1e-2 {
            break;
        }
        if decreasing {
            diff = -diff;
        }
        if diff < 0.0 {
            lo = t;
            t += (hi - t) * 0.5;
        } else {
            hi = t;
            t += (lo - t) * 0.5;
        }
        diff = lightness_at(t) - ideal;
    }

    t
}

fn is_diverging(points: &[Components]) -> bool {
    let falling = points.windows(2).all(|w| w[1].0 - w[0].0 < 0.0);
    let rising = points.windows(2).all(|w| w[1].0 - w[0].0 >= 0.0);
    !(falling || rising)
}

fn to_point(rgb: Rgb, lch: bool) -> Components {
    if lch {
        rgb.to_lch().to_components()
    } else {
        rgb.to_lab().to_components()
    }
}

fn point_to_rgb01(point: Components, lch: bool) -> Rgb01 {
    if lch {
        Lch::from(point).to_rgb01()
    } else {
        Lab::from(point).to_rgb01()
    }
}

fn odd_required(count: usize, n: usize) -> Result<()> {
    if n % 2 == 0 {
        return Err(ColorError::ConstraintViolation {
            message: format!(
                "number of colors has to be odd for bezier interpolation with {count} \
                 diverging control colors, got {n}"
            ),
        });
    }
    Ok(())
}

/// Join two half ramps, dropping the duplicated midpoint, and re-encode them
/// as interpolation-space points.
fn join_halves(first: Vec<Rgb01>, second: Vec<Rgb01>, lch: bool) -> Vec<Components> {
    first
        .into_iter()
        .chain(second.into_iter().skip(1))
        .map(|c| to_point(c.to_rgb(), lch))
        .collect()
}

fn interpolate(controls: &[Rgb], n: usize, lch: bool, correct: bool) -> Result<Vec<Rgb01>> {
    if n < 2 {
        return Err(ColorError::InvalidInput {
            message: format!("number of interpolated colors must be at least 2, got {n}"),
        });
    }
    if controls.is_empty() || controls.len() > 5 {
        return Err(ColorError::InvalidInput {
            message: format!(
                "{} control colors given, between 1 and 5 supported",
                controls.len()
            ),
        });
    }

    let points: Vec<Components> = controls.iter().map(|&c| to_point(c, lch)).collect();

    let diverging = is_diverging(&points);
    if diverging && points.len() == 4 {
        return Err(ColorError::ConstraintViolation {
            message: "4 control colors must have increasing or decreasing lightness".to_owned(),
        });
    }

    let samples: Vec<Components> = match points.len() {
        1 => vec![points[0]; n],
        2 => {
            let (p0, p1) = (points[0], points[1]);
            (0..n)
                .map(|i| {
                    let mut t = i as Component / (n - 1) as Component;
                    if correct {
                        t = correct_lightness(p0.0, p1.0, t, |t| bezier2(p0.0, p1.0, t));
                    }
                    Components(
                        bezier2(p0.0, p1.0, t),
                        bezier2(p0.1, p1.1, t),
                        bezier2(p0.2, p1.2, t),
                    )
                })
                .collect()
        }
        3 if diverging => {
            odd_required(3, n)?;
            let half = n / 2 + 1;
            // Both halves interpolate on their own, in L*a*b* with lightness
            // correction, then rejoin through device RGB.
            let first = interpolate(&controls[..2], half, false, true)?;
            let second = interpolate(&controls[1..], half, false, true)?;
            join_halves(first, second, lch)
        }
        3 => {
            let (p0, p1, p2) = (points[0], points[1], points[2]);
            (0..n)
                .map(|i| {
                    let mut t = i as Component / (n - 1) as Component;
                    if correct {
                        t = correct_lightness(p0.0, p2.0, t, |t| bezier3(p0.0, p1.0, p2.0, t));
                    }
                    Components(
                        bezier3(p0.0, p1.0, p2.0, t),
                        bezier3(p0.1, p1.1, p2.1, t),
                        bezier3(p0.2, p1.2, p2.2, t),
                    )
                })
                .collect()
        }
        4 => {
            let (p0, p1, p2, p3) = (points[0], points[1], points[2], points[3]);
            (0..n)
                .map(|i| {
                    let mut t = i as Component / (n - 1) as Component;
                    if correct {
                        t = correct_lightness(p0.0, p3.0, t, |t| {
                            bezier4(p0.0, p1.0, p2.0, p3.0, t)
                        });
                    }
                    Components(
                        bezier4(p0.0, p1.0, p2.0, p3.0, t),
                        bezier4(p0.1, p1.1, p2.1, p3.1, t),
                        bezier4(p0.2, p1.2, p2.2, p3.2, t),
                    )
                })
                .collect()
        }
        _ => {
            odd_required(5, n)?;
            let half = n / 2 + 1;
            let first = interpolate(&controls[..3], half, false, true)?;
            let second = interpolate(&controls[2..], half, false, true)?;
            join_halves(first, second, lch)
        }
    };

    Ok(samples.into_iter().map(|p| point_to_rgb01(p, lch)).collect())
}
