use crate::math::polygon_2d::{clip_to_rect, signed_area};
use crate::math::Point;

use super::viewport::Viewport;

/// Upper bound on the pieces a single quadratic segment is flattened into.
const MAX_QUAD_SUBDIVISIONS: u32 = 64;

/// Kind of edge leading to a vertex of an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Straight,
    Quadratic,
}

/// One edge of an outline, ending at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line to `to`.
    Line { to: Point },
    /// Quadratic Bézier to `to` with control point `ctrl`.
    Quad { ctrl: Point, to: Point },
}

impl Segment {
    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point {
        match *self {
            Self::Line { to } | Self::Quad { to, .. } => to,
        }
    }

    /// Returns the segment kind.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Line { .. } => SegmentKind::Straight,
            Self::Quad { .. } => SegmentKind::Quadratic,
        }
    }
}

/// A closed outline made of straight and quadratic segments.
///
/// The last segment implicitly connects back to `start`. An outline with no
/// segments is empty and covers no area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl Outline {
    /// Starts a new outline at `start`.
    #[must_use]
    pub fn begin(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Appends a straight segment.
    #[must_use]
    pub fn line_to(mut self, to: Point) -> Self {
        self.segments.push(Segment::Line { to });
        self
    }

    /// Appends a quadratic segment.
    #[must_use]
    pub fn quad_to(mut self, ctrl: Point, to: Point) -> Self {
        self.segments.push(Segment::Quad { ctrl, to });
        self
    }

    /// The full viewport rectangle.
    #[must_use]
    pub fn rect(viewport: &Viewport) -> Self {
        let (w, h) = (viewport.width(), viewport.height());
        Self::begin(Point::origin())
            .line_to(Point::new(w, 0.0))
            .line_to(Point::new(w, h))
            .line_to(Point::new(0.0, h))
    }

    /// Whether the outline has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The on-curve vertices: `start` followed by every segment end.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.segments.iter().map(Segment::end))
            .collect()
    }

    /// Converts the outline into a closed polyline.
    ///
    /// Quadratic segments are subdivided so the chords stay within
    /// `tolerance` of the curve. The closing edge is implicit; the start
    /// point is not repeated.
    #[must_use]
    pub fn flatten(&self, tolerance: f64) -> Vec<Point> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut points = Vec::with_capacity(self.segments.len() * 4 + 1);
        points.push(self.start);
        let mut current = self.start;

        for segment in &self.segments {
            match *segment {
                Segment::Line { to } => points.push(to),
                Segment::Quad { ctrl, to } => {
                    let n = quad_subdivision_count(&current, &ctrl, &to, tolerance);
                    for step in 1..=n {
                        let t = f64::from(step) / f64::from(n);
                        points.push(quad_point_at(&current, &ctrl, &to, t));
                    }
                }
            }
            current = segment.end();
        }

        if points.len() > 1 && points.last() == Some(&self.start) {
            points.pop();
        }
        points
    }

    /// Signed area enclosed by the flattened outline.
    #[must_use]
    pub fn signed_area(&self, tolerance: f64) -> f64 {
        signed_area(&self.flatten(tolerance))
    }

    /// Area of the part of the outline that lies inside the viewport.
    #[must_use]
    pub fn area_in(&self, viewport: &Viewport, tolerance: f64) -> f64 {
        let clipped = clip_to_rect(&self.flatten(tolerance), &viewport.min(), &viewport.max());
        signed_area(&clipped).abs()
    }
}

/// Evaluates the quadratic Bézier `p0`-`p1`-`p2` at `t`.
#[must_use]
pub fn quad_point_at(p0: &Point, p1: &Point, p2: &Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::from(p0.coords * (mt * mt) + p1.coords * (2.0 * mt * t) + p2.coords * (t * t))
}

/// Number of chords needed to keep a quadratic within `tolerance`.
///
/// The second derivative of a quadratic is constant, so uniform steps of
/// `1/n` deviate by at most `|p0 - 2 p1 + p2| / (4 n^2)`.
fn quad_subdivision_count(p0: &Point, p1: &Point, p2: &Point, tolerance: f64) -> u32 {
    let dd = (p0.coords - p1.coords * 2.0 + p2.coords).norm();
    if tolerance <= 0.0 || !dd.is_finite() || dd < 1e-12 {
        return 1;
    }
    let n = (dd / (4.0 * tolerance)).sqrt().ceil();
    if n >= f64::from(MAX_QUAD_SUBDIVISIONS) {
        return MAX_QUAD_SUBDIVISIONS;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n as u32;
    n.max(1)
}
