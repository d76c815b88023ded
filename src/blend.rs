//! Interpolate between colors in RGB space; make continuous color maps.

use num_traits::Float;

use crate::color::Component;
use crate::error::{ColorError, Result};
use crate::models::Rgb01;

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Calculate the color at `fraction` between two colors, elementwise in RGB
/// space. The fraction is not clamped; values outside [0, 1] extrapolate.
pub fn blend(c1: Rgb01, c2: Rgb01, fraction: Component) -> Rgb01 {
    Rgb01::new(
        lerp(c1.red, c2.red, fraction),
        lerp(c1.green, c2.green, fraction),
        lerp(c1.blue, c2.blue, fraction),
    )
}

/// `n` interpolated colors between two colors, the first being `c1` and the
/// last `c2`. A `power` above 1 keeps samples longer near `c1`, below 1
/// longer near `c2`.
pub fn range(c1: Rgb01, c2: Rgb01, n: usize, power: Component) -> Result<Vec<Rgb01>> {
    if n < 2 {
        return Err(ColorError::InvalidInput {
            message: format!("number of interpolated colors must be at least 2, got {n}"),
        });
    }

    Ok((0..n)
        .map(|i| {
            let t = i as Component / (n - 1) as Component;
            blend(c1, c2, t.powf(power))
        })
        .collect())
}

/// `n` interpolated colors across several colors changing at the given
/// breakpoint fractions.
///
/// Query fractions before the first breakpoint or after the last return the
/// corresponding endpoint color unchanged; exact breakpoint hits return the
/// breakpoint color verbatim; in between, [`blend`] is applied at the local
/// fraction between the two bracketing breakpoints.
pub fn gradient(colors: &[Rgb01], fractions: &[Component], n: usize) -> Result<Vec<Rgb01>> {
    if colors.len() != fractions.len() {
        return Err(ColorError::InvalidInput {
            message: format!(
                "{} colors given for {} fractions",
                colors.len(),
                fractions.len()
            ),
        });
    }
    if colors.is_empty() {
        return Err(ColorError::InvalidInput {
            message: "at least one color and fraction required".to_owned(),
        });
    }
    if n < 2 {
        return Err(ColorError::InvalidInput {
            message: format!("number of interpolated colors must be at least 2, got {n}"),
        });
    }

    let last = colors.len() - 1;
    Ok((0..n)
        .map(|i| {
            let frac = i as Component / (n - 1) as Component;
            if frac <= fractions[0] {
                return colors[0];
            }
            if frac >= fractions[last] {
                return colors[last];
            }
            // The first breakpoint at or above the query fraction; always at
            // index 1 or later because of the endpoint checks above.
            let ii = fractions
                .iter()
                .position(|&f| f >= frac)
                .unwrap_or(last);
            if (fractions[ii] - frac).abs() > Component::EPSILON {
                let local = (frac - fractions[ii - 1]) / (fractions[ii] - fractions[ii - 1]);
                blend(colors[ii - 1], colors[ii], local)
            } else {
                colors[ii]
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb01 = Rgb01 {
        red: 1.0,
        green: 0.0,
        blue: 0.0,
    };
    const BLUE: Rgb01 = Rgb01 {
        red: 0.0,
        green: 0.0,
        blue: 1.0,
    };

    #[test]
    fn blend_is_linear_in_the_fraction() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
        assert_eq!(blend(RED, BLUE, 0.5), Rgb01::new(0.5, 0.0, 0.5));
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
    }

    #[test]
    fn range_samples_uniformly() {
        let colors = range(RED, BLUE, 3, 1.0).unwrap();
        assert_eq!(colors, vec![RED, Rgb01::new(0.5, 0.0, 0.5), BLUE]);
    }

    #[test]
    fn range_power_eases_towards_the_first_color() {
        let colors = range(RED, BLUE, 3, 2.0).unwrap();
        assert_eq!(colors[1], Rgb01::new(0.75, 0.0, 0.25));
    }

    #[test]
    fn range_rejects_fewer_than_two_samples() {
        assert!(range(RED, BLUE, 1, 1.0).is_err());
    }

    #[test]
    fn gradient_with_two_stops_is_a_plain_blend() {
        let colors = gradient(&[RED, BLUE], &[0.0, 1.0], 3).unwrap();
        assert_eq!(colors, vec![RED, Rgb01::new(0.5, 0.0, 0.5), BLUE]);
    }

    #[test]
    fn gradient_returns_endpoints_verbatim_outside_the_breakpoints() {
        let colors = gradient(&[RED, RED, BLUE, BLUE], &[0.0, 0.25, 0.75, 1.0], 5).unwrap();
        assert_eq!(
            colors,
            vec![RED, RED, Rgb01::new(0.5, 0.0, 0.5), BLUE, BLUE]
        );
    }

    #[test]
    fn gradient_rejects_mismatched_lengths() {
        assert!(gradient(&[RED, BLUE], &[0.0, 0.5, 1.0], 5).is_err());
        assert!(gradient(&[], &[], 5).is_err());
    }
}
