//! Small helpers on top of `Vector3D`.
//!
//! nalgebra already provides add/sub/dot/cross/scale/magnitude. What it does
//! not provide is a normalize that is total: `Vector3::normalize` yields NaN
//! for the zero vector. The camera basis and the force laws go through
//! [`normalize_or_zero`] instead.

use super::states::Vector3D;

/// Below this length a vector is treated as zero-length.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

pub fn vec3(x: f64, y: f64, z: f64) -> Vector3D {
    Vector3D::new(x, y, z)
}

/// Unit vector in the direction of `v`, or the zero vector if `v` has no length.
pub fn normalize_or_zero(v: Vector3D) -> Vector3D {
    v.try_normalize(NORMALIZE_EPSILON).unwrap_or_else(Vector3D::zeros)
}

/// Rotate `p` by `radians` about the vertical (y) axis.
pub fn rotate_about_y(p: Vector3D, radians: f64) -> Vector3D {
    let (sin, cos) = radians.sin_cos();
    Vector3D::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Rotate `p` by `radians` about the horizontal (x) axis.
pub fn rotate_about_x(p: Vector3D, radians: f64) -> Vector3D {
    let (sin, cos) = radians.sin_cos();
    Vector3D::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}
