pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type (easting, northing).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (easting, northing, depth).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix type.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotation by -90° in the plan plane: `(x, y) -> (y, -x)`.
#[must_use]
pub fn rotate_cw(v: &Vector2) -> Vector2 {
    Matrix2::new(0.0, 1.0, -1.0, 0.0) * v
}

/// Returns `true` if both coordinates are finite.
#[must_use]
pub fn is_finite_2d(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
