//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::Component;

/// A 3x3 matrix in row-major order.
pub type Matrix = [[Component; 3]; 3];

/// A 3x3 matrix embedded in a euclid transform.
pub type Transform = Transform3D<Component>;

/// A three component vector, used to hand the color components of an
/// [`Oklab`](crate::Oklab) to generic vector math.
pub type Vec3 = Vector3D<Component>;

/// A four component vector, the color components followed by alpha.
pub type Vec4 = [Component; 4];

/// Build a transform that multiplies by the row-major matrix `m`.
#[rustfmt::skip]
pub const fn transform_3x3(m: &Matrix) -> Transform {
    // euclid multiplies row vectors, so the rows of `m` become columns.
    Transform::new(
        m[0][0], m[1][0], m[2][0], 0.0,
        m[0][1], m[1][1], m[2][1], 0.0,
        m[0][2], m[1][2], m[2][2], 0.0,
        0.0,     0.0,     0.0,     1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(
    transform: &Transform,
    x: Component,
    y: Component,
    z: Component,
) -> [Component; 3] {
    let Vec3 { x, y, z, .. } = transform.transform_vector3d(Vec3::new(x, y, z));
    [x, y, z]
}

/// Interpolate from `a` to `b`. `t` is not clamped, values outside of
/// `[0, 1]` extrapolate.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
