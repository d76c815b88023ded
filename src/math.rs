//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 transform over [`Component`] values.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from the coefficients of a 3x3 matrix, listed
/// column by column.
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform3D::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Clamp `x` into the closed interval [`min`, `max`].
pub fn limit<T: Float>(x: T, min: T, max: T) -> T {
    x.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_clamps_into_the_interval() {
        assert_eq!(limit(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(limit(2.0, 0.0, 1.0), 1.0);
        assert_eq!(limit(0.5, 0.0, 1.0), 0.5);
        assert_eq!(limit(267.0, 0.0, 255.0), 255.0);
    }

    #[test]
    fn transform_is_a_row_vector_product() {
        let identity = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let c = transform(&identity, Components(0.25, 0.5, 0.75));
        assert_eq!(c, Components(0.25, 0.5, 0.75));

        let swap = transform_3x3(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let c = transform(&swap, Components(1.0, 2.0, 3.0));
        assert_eq!(c, Components(2.0, 1.0, 3.0));
    }
}
