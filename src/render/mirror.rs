use crate::geometry::FoldGeometry;
use crate::math::{Affine, Point, Vector, TOLERANCE};

/// Reflection of the page about the fold line `e–h`.
///
/// The rasterizer draws the page image through this transform to obtain
/// the back face, then shades it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorTransform {
    matrix: Affine,
}

impl MirrorTransform {
    /// The identity transform, used when there is no fold.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Affine::identity(),
        }
    }

    /// Builds the reflection about the fold line through `e` and `h`.
    ///
    /// With `sin = (f.x - e.x) / |eh|` and `cos = (h.y - f.y) / |eh|`, the
    /// linear part is `[[2 sin² - 1, 2 sin cos], [2 sin cos, 1 - 2 sin²]]`,
    /// applied around `e`.
    #[must_use]
    pub fn from_geometry(geometry: &FoldGeometry) -> Self {
        if geometry.is_flat() {
            return Self::identity();
        }

        let (e, f, h) = (geometry.e(), geometry.f(), geometry.h());
        let eh = (f.x - e.x).hypot(h.y - f.y);
        if eh < TOLERANCE || !eh.is_finite() {
            return Self::identity();
        }
        let sin = (f.x - e.x) / eh;
        let cos = (h.y - f.y) / eh;

        #[rustfmt::skip]
        let reflect = Affine::new(
            2.0 * sin * sin - 1.0, 2.0 * sin * cos,       0.0,
            2.0 * sin * cos,       1.0 - 2.0 * sin * sin, 0.0,
            0.0,                   0.0,                   1.0,
        );
        let matrix = Affine::new_translation(&e.coords)
            * reflect
            * Affine::new_translation(&Vector::new(-e.x, -e.y));
        Self { matrix }
    }

    /// Returns the homogeneous matrix.
    #[must_use]
    pub fn matrix(&self) -> &Affine {
        &self.matrix
    }

    /// The 2x3 affine part, row-major: `[sx, kx, tx, ky, sy, ty]`.
    #[must_use]
    pub fn to_affine_2x3(&self) -> [f64; 6] {
        let m = &self.matrix;
        [
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
        ]
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply(&self, p: &Point) -> Point {
        self.matrix.transform_point(p)
    }
}

impl Default for MirrorTransform {
    fn default() -> Self {
        Self::identity()
    }
}
