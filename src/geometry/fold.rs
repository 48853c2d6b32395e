use tracing::trace;

use crate::math::distance_2d::point_to_line_dist;
use crate::math::intersect_2d::line_line_intersect;
use crate::math::{midpoint, safe_div, Point, TOLERANCE};

use super::viewport::Viewport;

/// The full set of control points describing one frame of the curl.
///
/// Every point is a pure function of the drag point `a` and the anchor `f`;
/// a new value is computed whenever either changes.
///
/// - `g`: midpoint of `a` and `f`
/// - `e`, `h`: where the straight fold line meets the anchor's horizontal
///   and vertical edges; control points of the two fold curves
/// - `c`, `j`: outer ends of the fold curves on those edges
/// - `b`, `k`: where `a–e` and `a–h` cross `c–j`
/// - `d`, `i`: midpoints of the two fold curves, shadow references
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldGeometry {
    a: Point,
    f: Point,
    g: Point,
    e: Point,
    h: Point,
    c: Point,
    j: Point,
    b: Point,
    k: Point,
    d: Point,
    i: Point,
    l_shadow_dis: f64,
    r_shadow_dis: f64,
}

impl FoldGeometry {
    /// The trivial geometry with no fold: every point sits on `f`.
    #[must_use]
    pub fn flat(f: Point) -> Self {
        Self {
            a: f,
            f,
            g: f,
            e: f,
            h: f,
            c: f,
            j: f,
            b: f,
            k: f,
            d: f,
            i: f,
            l_shadow_dis: 0.0,
            r_shadow_dis: 0.0,
        }
    }

    /// Derives the fold from drag point `a` and anchor `f`.
    ///
    /// Zero denominators fall back to `1.0`, so the result is finite for any
    /// finite input. `a == f` yields [`FoldGeometry::flat`].
    #[must_use]
    pub fn compute(a: Point, f: Point) -> Self {
        if (a - f).norm() < TOLERANCE {
            return Self::flat(f);
        }

        let g = midpoint(&a, &f);
        let e = Point::new(g.x - safe_div((f.y - g.y).powi(2), f.x - g.x), f.y);
        let h = Point::new(f.x, g.y - safe_div((f.x - g.x).powi(2), f.y - g.y));
        let c = Point::new(e.x - (f.x - e.x) / 2.0, f.y);
        let j = Point::new(f.x, h.y - (f.y - h.y) / 2.0);

        let b = line_line_intersect(&a, &e, &c, &j);
        let k = line_line_intersect(&a, &h, &c, &j);

        // Midpoints of the quadratic curves c-(e)-b and k-(h)-j.
        let d = Point::from((c.coords + e.coords * 2.0 + b.coords) / 4.0);
        let i = Point::from((j.coords + h.coords * 2.0 + k.coords) / 4.0);

        Self {
            a,
            f,
            g,
            e,
            h,
            c,
            j,
            b,
            k,
            d,
            i,
            l_shadow_dis: point_to_line_dist(&d, &a, &e),
            r_shadow_dis: point_to_line_dist(&i, &a, &h),
        }
    }

    /// Like [`FoldGeometry::compute`], but keeps the fold from inverting
    /// when `a` is dragged far past the opposite edge.
    ///
    /// If `c` lands beyond the far edge (`x < 0`), `a` is pulled back along
    /// the ray from `f` so that `c` touches that edge, and the geometry is
    /// recomputed from the corrected point.
    #[must_use]
    pub fn fit(a: Point, f: Point, viewport: &Viewport) -> Self {
        let geo = Self::compute(a, f);
        if geo.is_flat() || geo.c.x >= 0.0 {
            return geo;
        }

        let reach = (f.x - geo.c.x).abs();
        let scale = viewport.width() / reach;
        if !scale.is_finite() || scale >= 1.0 {
            return geo;
        }

        let corrected = f + (a - f) * scale;
        trace!(
            c_x = geo.c.x,
            scale,
            a_x = corrected.x,
            a_y = corrected.y,
            "fold overshoot corrected"
        );
        Self::compute(corrected, f)
    }

    /// Whether this is the trivial no-fold geometry.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        (self.a - self.f).norm() < TOLERANCE
    }

    /// Whether every coordinate and distance is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points().iter().all(|p| p.x.is_finite() && p.y.is_finite())
            && self.l_shadow_dis.is_finite()
            && self.r_shadow_dis.is_finite()
    }

    /// All eleven points in the order `a, f, g, e, h, c, j, b, k, d, i`.
    #[must_use]
    pub fn points(&self) -> [Point; 11] {
        [
            self.a, self.f, self.g, self.e, self.h, self.c, self.j, self.b, self.k, self.d,
            self.i,
        ]
    }

    /// Distance between the drag point and the anchor.
    #[must_use]
    pub fn reach(&self) -> f64 {
        (self.a - self.f).norm()
    }

    #[must_use]
    pub fn a(&self) -> Point {
        self.a
    }

    #[must_use]
    pub fn f(&self) -> Point {
        self.f
    }

    #[must_use]
    pub fn g(&self) -> Point {
        self.g
    }

    #[must_use]
    pub fn e(&self) -> Point {
        self.e
    }

    #[must_use]
    pub fn h(&self) -> Point {
        self.h
    }

    #[must_use]
    pub fn c(&self) -> Point {
        self.c
    }

    #[must_use]
    pub fn j(&self) -> Point {
        self.j
    }

    #[must_use]
    pub fn b(&self) -> Point {
        self.b
    }

    #[must_use]
    pub fn k(&self) -> Point {
        self.k
    }

    #[must_use]
    pub fn d(&self) -> Point {
        self.d
    }

    #[must_use]
    pub fn i(&self) -> Point {
        self.i
    }

    /// Perpendicular distance from `d` to the line `a–e`.
    #[must_use]
    pub fn l_shadow_dis(&self) -> f64 {
        self.l_shadow_dis
    }

    /// Perpendicular distance from `i` to the line `a–h`.
    #[must_use]
    pub fn r_shadow_dis(&self) -> f64 {
        self.r_shadow_dis
    }
}
