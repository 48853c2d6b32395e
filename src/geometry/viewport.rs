use crate::error::{ConfigError, Result};
use crate::math::Point;

/// Distance kept between a pointer-driven drag point and the viewport edges.
pub const EDGE_INSET: f64 = 1.0;

/// Size of the page viewport in pixels.
///
/// Passed explicitly to every geometry call that depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a new viewport.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidViewport` if either dimension is not
    /// positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidViewport { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Returns the viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the viewport height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the viewport area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the length of the viewport diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Top-left corner (the origin).
    #[must_use]
    pub fn min(&self) -> Point {
        Point::origin()
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Clamps `p` into `[1, W-1] x [1, H-1]`.
    ///
    /// Viewports narrower than two pixels collapse the range onto the inset.
    #[must_use]
    pub fn clamp_interior(&self, p: Point) -> Point {
        let max_x = (self.width - EDGE_INSET).max(EDGE_INSET);
        let max_y = (self.height - EDGE_INSET).max(EDGE_INSET);
        Point::new(p.x.clamp(EDGE_INSET, max_x), p.y.clamp(EDGE_INSET, max_y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_bad_dimensions() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 100.0).is_err());
        assert!(Viewport::new(f64::INFINITY, 100.0).is_err());
    }

    #[test]
    fn accessors() {
        let vp = Viewport::new(300.0, 400.0).unwrap();
        assert!((vp.area() - 120_000.0).abs() < 1e-9);
        assert!((vp.diagonal() - 500.0).abs() < 1e-9);
        assert_eq!(vp.max(), Point::new(300.0, 400.0));
    }

    #[test]
    fn clamp_interior_keeps_inset() {
        let vp = Viewport::new(300.0, 600.0).unwrap();
        assert_eq!(vp.clamp_interior(Point::new(-50.0, 900.0)), Point::new(1.0, 599.0));
        assert_eq!(vp.clamp_interior(Point::new(300.0, 0.0)), Point::new(299.0, 1.0));
        assert_eq!(vp.clamp_interior(Point::new(120.0, 80.0)), Point::new(120.0, 80.0));
    }

    #[test]
    fn clamp_interior_tiny_viewport() {
        let vp = Viewport::new(1.5, 1.0).unwrap();
        let p = vp.clamp_interior(Point::new(10.0, -10.0));
        assert_eq!(p, Point::new(1.0, 1.0));
    }
}
