use super::{Point, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive when the vertices turn counter-clockwise in a y-up frame, which
/// is clockwise on screen (y down).
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Clips a closed polygon against the axis-aligned rectangle `[min, max]`
/// (Sutherland–Hodgman).
///
/// The rectangle is convex, so the result is exact for any simple input
/// polygon. Returns an empty vector if nothing remains.
#[must_use]
pub fn clip_to_rect(points: &[Point], min: &Point, max: &Point) -> Vec<Point> {
    let mut output = points.to_vec();
    for edge in [
        ClipEdge::Left(min.x),
        ClipEdge::Right(max.x),
        ClipEdge::Top(min.y),
        ClipEdge::Bottom(max.y),
    ] {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let n = input.len();
        for i in 0..n {
            let current = input[i];
            let prev = input[(i + n - 1) % n];
            let current_in = edge.contains(&current);
            let prev_in = edge.contains(&prev);
            if current_in {
                if !prev_in {
                    output.push(edge.crossing(&prev, &current));
                }
                output.push(current);
            } else if prev_in {
                output.push(edge.crossing(&prev, &current));
            }
        }
    }
    output
}

/// One half-plane of the clipping rectangle.
#[derive(Debug, Clone, Copy)]
enum ClipEdge {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl ClipEdge {
    fn contains(self, p: &Point) -> bool {
        match self {
            Self::Left(x) => p.x >= x,
            Self::Right(x) => p.x <= x,
            Self::Top(y) => p.y >= y,
            Self::Bottom(y) => p.y <= y,
        }
    }

    /// Point where segment `p`→`q` crosses this edge's boundary line.
    fn crossing(self, p: &Point, q: &Point) -> Point {
        match self {
            Self::Left(x) | Self::Right(x) => {
                let dx = q.x - p.x;
                let t = if dx.abs() < TOLERANCE { 0.0 } else { (x - p.x) / dx };
                Point::new(x, p.y + (q.y - p.y) * t)
            }
            Self::Top(y) | Self::Bottom(y) => {
                let dy = q.y - p.y;
                let t = if dy.abs() < TOLERANCE { 0.0 } else { (y - p.y) / dy };
                Point::new(p.x + (q.x - p.x) * t, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ]
    }

    #[test]
    fn signed_area_square() {
        let area = signed_area(&square(0.0, 0.0, 2.0));
        assert!((area.abs() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_orientation_flips() {
        let mut pts = square(0.0, 0.0, 1.0);
        let forward = signed_area(&pts);
        pts.reverse();
        let backward = signed_area(&pts);
        assert!((forward + backward).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[]).abs() < TOLERANCE);
        assert!(signed_area(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]).abs() < TOLERANCE);
    }

    #[test]
    fn clip_fully_inside_is_unchanged() {
        let pts = square(1.0, 1.0, 2.0);
        let clipped = clip_to_rect(&pts, &Point::new(0.0, 0.0), &Point::new(10.0, 10.0));
        assert_eq!(clipped.len(), 4);
        assert!((signed_area(&clipped).abs() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn clip_partial_overlap() {
        // Square [-1, 1]^2 against [0, 10]^2 keeps the quarter [0, 1]^2.
        let pts = square(-1.0, -1.0, 2.0);
        let clipped = clip_to_rect(&pts, &Point::new(0.0, 0.0), &Point::new(10.0, 10.0));
        assert!((signed_area(&clipped).abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn clip_fully_outside_is_empty() {
        let pts = square(20.0, 20.0, 2.0);
        let clipped = clip_to_rect(&pts, &Point::new(0.0, 0.0), &Point::new(10.0, 10.0));
        assert!(signed_area(&clipped).abs() < TOLERANCE);
    }

    #[test]
    fn clip_triangle_crossing_corner() {
        // Right triangle (0,0)-(4,0)-(0,4) clipped to x <= 2 leaves a trapezoid of area 6.
        let pts = vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
        let clipped = clip_to_rect(&pts, &Point::new(0.0, 0.0), &Point::new(2.0, 10.0));
        assert!((signed_area(&clipped).abs() - 6.0).abs() < 1e-9);
    }
}
