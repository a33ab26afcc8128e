//! Geometry kernel: distances, displacements, rotations and axis snapping.
//!
//! Convention
//! - Screen coordinates: `+x` right, `+y` down (host surfaces and SVG agree).
//! - `rotate` applies the standard rotation matrix; `clockwise = true` negates
//!   the angle. With `+y` down this turns `(1, 0)` into `(0, -1)`, i.e. "up".
//!
//! Everything here is pure and works on plain `nalgebra` values, so the usual
//! operators cover the vector algebra (negate, scale, add, point ± vector);
//! `Vector2::component_mul` is the element-wise product.

use nalgebra::{Point2, Rotation2, Vector2};

/// Components with magnitude below this snap to exactly zero in [`normalize_axis`].
pub const AXIS_EPS: f64 = 1e-4;

/// Euclidean distance between `p1` and `p2`.
#[inline]
pub fn distance(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    nalgebra::distance(&p1, &p2)
}

/// Raw displacement `p2 - p1` (not normalized).
#[inline]
pub fn direction(p1: Point2<f64>, p2: Point2<f64>) -> Vector2<f64> {
    p2 - p1
}

/// Rotate `v` by `degrees`; clockwise rotations use the negated angle.
pub fn rotate(v: Vector2<f64>, clockwise: bool, degrees: f64) -> Vector2<f64> {
    let signed = if clockwise { -degrees } else { degrees };
    Rotation2::new(signed.to_radians()) * v
}

/// Quarter turn, the common case for edge normals and piece walks.
#[inline]
pub fn rotate90(v: Vector2<f64>, clockwise: bool) -> Vector2<f64> {
    rotate(v, clockwise, 90.0)
}

/// Snap near-zero components (|c| < [`AXIS_EPS`]) to exactly zero.
pub fn normalize_axis(v: Vector2<f64>) -> Vector2<f64> {
    v.map(|c| if c.abs() < AXIS_EPS { 0.0 } else { c })
}

/// Compass direction of `v`: every surviving component becomes ±1, zeros stay 0.
///
/// Rotation leaves residual noise such as `6e-17`; [`normalize_axis`] removes it
/// first, and the `0 / 0` NaN of an empty component is coerced to 0 so it can
/// never leak into later point arithmetic.
pub fn unit_axis(v: Vector2<f64>) -> Vector2<f64> {
    normalize_axis(v).map(|c| {
        let s = c / c.abs();
        if s.is_nan() {
            0.0
        } else {
            s
        }
    })
}
