pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point in viewport pixels (origin top-left, y down).
pub type Point = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector = nalgebra::Vector2<f64>;

/// Homogeneous 3x3 matrix carrying a 2x3 affine transform.
pub type Affine = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Denominator substituted for numerically zero divisions.
pub const DENOMINATOR_FLOOR: f64 = 1.0;

/// Divides `num` by `den`, using [`DENOMINATOR_FLOOR`] when `den` is
/// numerically zero so the result stays finite.
#[must_use]
pub fn safe_div(num: f64, den: f64) -> f64 {
    if den.abs() < TOLERANCE {
        num / DENOMINATOR_FLOOR
    } else {
        num / den
    }
}

/// Returns the midpoint of `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point, b: &Point) -> Point {
    nalgebra::center(a, b)
}
