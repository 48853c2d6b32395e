use super::{safe_div, Point};

/// Intersection of the infinite line through `p1`/`p2` with the infinite
/// line through `p3`/`p4`.
///
/// Uses the determinant form. Parallel or degenerate lines have a zero
/// denominator, which is replaced by [`super::DENOMINATOR_FLOOR`]; the result
/// is then meaningless but finite for finite input.
#[must_use]
pub fn line_line_intersect(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Point {
    let cross12 = p1.x * p2.y - p2.x * p1.y;
    let cross34 = p3.x * p4.y - p4.x * p3.y;
    let den = (p3.x - p4.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p3.y - p4.y);

    let x = safe_div((p1.x - p2.x) * cross34 - (p3.x - p4.x) * cross12, den);
    let y = safe_div((p1.y - p2.y) * cross34 - (p3.y - p4.y) * cross12, den);
    Point::new(x, y)
}
