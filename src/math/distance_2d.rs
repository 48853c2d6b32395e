use super::{Point, TOLERANCE};

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
///
/// If `a` and `b` coincide the line is undefined and the distance to `a` is
/// returned instead.
#[must_use]
pub fn point_to_line_dist(p: &Point, a: &Point, b: &Point) -> f64 {
    // Line in implicit form: la * x + lb * y + lc = 0.
    let la = a.y - b.y;
    let lb = b.x - a.x;
    let lc = a.x * b.y - b.x * a.y;
    let norm = la.hypot(lb);

    if norm < TOLERANCE {
        return (p - a).norm();
    }

    (la * p.x + lb * p.y + lc).abs() / norm
}
