use crate::config::ShadowConfig;
use crate::geometry::{AnchorCorner, FoldGeometry, Outline, Viewport};
use crate::math::Point;

use super::regions::RegionKind;

/// Length of the right-fold band, in viewport diagonals. Long enough to
/// run past any edge once rotated; the clip trims it.
const RIGHT_BAND_DIAGONALS: f64 = 10.0;

/// Padding around the back-face C band.
const BACK_FACE_C_PADDING: f64 = 1.0;

/// Axis-aligned rectangle, before the band's rotation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Creates a rectangle from two x and two y bounds in any order.
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// The shadow bands the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowKind {
    /// Along the `a–e` edge of the flap.
    LeftFold,
    /// Along the `a–h` edge of the flap.
    RightFold,
    /// Beside the wipe line of a horizontal drag.
    HorizontalDrag,
    /// Cast by the curl onto the exposed page.
    BackFaceB,
    /// Shading on the folded back face.
    BackFaceC,
}

/// Direction of a two-stop gradient, from the opaque stop to the
/// transparent one, in the band's unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientAxis {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

/// One oriented shadow band.
///
/// The rasterizer fills `bounds` with the gradient after rotating the
/// canvas by `rotation` radians around `pivot`, clipped to `region` and,
/// when present, to `clip`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowBand {
    pub kind: ShadowKind,
    pub bounds: Rect,
    pub gradient: GradientAxis,
    pub pivot: Point,
    pub rotation: f64,
    /// Length of the gradient from opaque to transparent.
    pub extent: f64,
    pub clip: Option<Outline>,
    pub region: RegionKind,
}

impl ShadowBand {
    /// Rotation in degrees, as most canvas APIs expect.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }
}

/// All shadow bands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowSet {
    bands: Vec<ShadowBand>,
}

impl ShadowSet {
    /// Returns the bands in draw order.
    #[must_use]
    pub fn bands(&self) -> &[ShadowBand] {
        &self.bands
    }

    /// Looks up the band of the given kind.
    #[must_use]
    pub fn get(&self, kind: ShadowKind) -> Option<&ShadowBand> {
        self.bands.iter().find(|band| band.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }
}

/// Derives the directional shadows from a fold.
#[derive(Debug)]
pub struct ShadowModel<'a> {
    geometry: &'a FoldGeometry,
    anchor: AnchorCorner,
    viewport: Viewport,
    config: ShadowConfig,
}

impl<'a> ShadowModel<'a> {
    /// Creates a new shadow model with the default [`ShadowConfig`].
    #[must_use]
    pub fn new(geometry: &'a FoldGeometry, anchor: AnchorCorner, viewport: Viewport) -> Self {
        Self {
            geometry,
            anchor,
            viewport,
            config: ShadowConfig::default(),
        }
    }

    /// Sets custom shadow parameters.
    #[must_use]
    pub fn with_config(mut self, config: ShadowConfig) -> Self {
        self.config = config;
        self
    }

    /// Computes the shadow bands: back-face bands always, then either the
    /// horizontal band or the two fold bands depending on the anchor.
    #[must_use]
    pub fn compute(&self) -> ShadowSet {
        if self.geometry.is_flat() {
            return ShadowSet::default();
        }

        let mut bands = vec![self.back_face_b(), self.back_face_c()];
        if self.anchor.is_horizontal() {
            bands.push(self.horizontal_drag());
        } else {
            bands.push(self.left_fold());
            bands.push(self.right_fold());
        }
        ShadowSet { bands }
    }

    fn left_fold(&self) -> ShadowBand {
        let geo = self.geometry;
        let (a, d, e) = (geo.a(), geo.d(), geo.e());
        let half = geo.l_shadow_dis() / 2.0;
        let height = self.viewport.height();

        let (bounds, gradient) = if self.anchor.is_top() {
            (Rect::new(e.x - half, e.y, e.x, e.y + height), GradientAxis::RightToLeft)
        } else {
            (Rect::new(e.x, e.y, e.x + half, e.y + height), GradientAxis::LeftToRight)
        };

        ShadowBand {
            kind: ShadowKind::LeftFold,
            bounds,
            gradient,
            pivot: e,
            rotation: (e.x - a.x).atan2(a.y - e.y),
            extent: half,
            clip: Some(
                Outline::begin(self.flap_root())
                    .line_to(d)
                    .line_to(e)
                    .line_to(a),
            ),
            region: RegionKind::Front,
        }
    }

    fn right_fold(&self) -> ShadowBand {
        let geo = self.geometry;
        let (a, h) = (geo.a(), geo.h());
        let half = geo.r_shadow_dis() / 2.0;
        let length = self.viewport.diagonal() * RIGHT_BAND_DIAGONALS;

        let (bounds, gradient) = if self.anchor.is_top() {
            (Rect::new(h.x, h.y - half, h.x + length, h.y), GradientAxis::BottomToTop)
        } else {
            (Rect::new(h.x, h.y, h.x + length, h.y + half), GradientAxis::TopToBottom)
        };

        ShadowBand {
            kind: ShadowKind::RightFold,
            bounds,
            gradient,
            pivot: h,
            rotation: (a.y - h.y).atan2(a.x - h.x),
            extent: half,
            clip: Some(Outline::begin(self.flap_root()).line_to(h).line_to(a)),
            region: RegionKind::Front,
        }
    }

    fn horizontal_drag(&self) -> ShadowBand {
        let geo = self.geometry;
        let (a, f, h) = (geo.a(), geo.f(), geo.h());
        let width = self
            .config
            .max_horizontal_width
            .min(geo.r_shadow_dis() / 2.0);

        ShadowBand {
            kind: ShadowKind::HorizontalDrag,
            bounds: Rect::new(a.x - width, 0.0, a.x, self.viewport.height()),
            gradient: GradientAxis::RightToLeft,
            pivot: a,
            rotation: (f.x - a.x).atan2(f.y - h.y),
            extent: width,
            clip: None,
            region: RegionKind::Front,
        }
    }

    fn back_face_b(&self) -> ShadowBand {
        let geo = self.geometry;
        let c = geo.c();
        let extent = geo.reach() / 4.0;
        let bottom = c.y + self.viewport.diagonal();

        let (bounds, gradient) = if self.anchor.is_top() {
            (Rect::new(c.x, c.y, c.x + extent, bottom), GradientAxis::LeftToRight)
        } else {
            (Rect::new(c.x - extent, c.y, c.x, bottom), GradientAxis::RightToLeft)
        };

        ShadowBand {
            kind: ShadowKind::BackFaceB,
            bounds,
            gradient,
            pivot: c,
            rotation: self.fold_axis_rotation(),
            extent,
            clip: None,
            region: RegionKind::Exposed,
        }
    }

    fn back_face_c(&self) -> ShadowBand {
        let geo = self.geometry;
        let (c, e, h, j) = (geo.c(), geo.e(), geo.h(), geo.j());
        let mid_ce = (c.x + e.x) / 2.0;
        let mid_jh = (j.y + h.y) / 2.0;
        let reach = (mid_ce - e.x).abs().min((mid_jh - h.y).abs());
        let bottom = c.y + self.viewport.diagonal();

        let (bounds, gradient) = if self.anchor.is_top() {
            (
                Rect::new(
                    c.x - BACK_FACE_C_PADDING,
                    c.y,
                    c.x + reach + BACK_FACE_C_PADDING,
                    bottom,
                ),
                GradientAxis::LeftToRight,
            )
        } else {
            (
                Rect::new(
                    c.x - reach - BACK_FACE_C_PADDING,
                    c.y,
                    c.x + BACK_FACE_C_PADDING,
                    bottom,
                ),
                GradientAxis::RightToLeft,
            )
        };

        ShadowBand {
            kind: ShadowKind::BackFaceC,
            bounds,
            gradient,
            pivot: c,
            rotation: self.fold_axis_rotation(),
            extent: reach + 2.0 * BACK_FACE_C_PADDING,
            clip: None,
            region: RegionKind::Folded,
        }
    }

    /// Rotation that aligns a vertical band at `c` with the fold line `e–h`.
    fn fold_axis_rotation(&self) -> f64 {
        let geo = self.geometry;
        (geo.e().x - geo.f().x).atan2(geo.h().y - geo.f().y)
    }

    /// Apex of the fold-shadow clip triangles, left of `a` by half the
    /// larger shadow distance.
    fn flap_root(&self) -> Point {
        let geo = self.geometry;
        let max_dis = geo.l_shadow_dis().max(geo.r_shadow_dis());
        Point::new(geo.a().x - max_dis / 2.0, geo.a().y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(300.0, 600.0).unwrap()
    }

    fn shadows_for(a: Point, anchor: AnchorCorner) -> ShadowSet {
        let vp = viewport();
        let geo = FoldGeometry::fit(anchor.constrain(a, &vp), anchor.anchor_point(&vp), &vp);
        ShadowModel::new(&geo, anchor, vp).compute()
    }

    #[test]
    fn flat_has_no_shadows() {
        let vp = viewport();
        let geo = FoldGeometry::flat(AnchorCorner::BottomRight.anchor_point(&vp));
        let set = ShadowModel::new(&geo, AnchorCorner::BottomRight, vp).compute();
        assert!(set.is_empty());
    }

    #[test]
    fn corner_modes_use_fold_bands() {
        for anchor in [AnchorCorner::TopRight, AnchorCorner::BottomRight] {
            let a = if anchor.is_top() {
                Point::new(200.0, 120.0)
            } else {
                Point::new(200.0, 480.0)
            };
            let set = shadows_for(a, anchor);
            assert_eq!(set.len(), 4, "{anchor:?}");
            assert!(set.get(ShadowKind::LeftFold).is_some());
            assert!(set.get(ShadowKind::RightFold).is_some());
            assert!(set.get(ShadowKind::HorizontalDrag).is_none());
        }
    }

    #[test]
    fn horizontal_modes_use_wipe_band() {
        for anchor in [AnchorCorner::Left, AnchorCorner::Right] {
            let set = shadows_for(Point::new(150.0, 300.0), anchor);
            assert_eq!(set.len(), 3, "{anchor:?}");
            let band = set.get(ShadowKind::HorizontalDrag).unwrap();
            assert!((band.bounds.max.x - 150.0).abs() < 1e-9);
            assert!(band.bounds.width() <= ShadowConfig::default().max_horizontal_width + 1e-9);
            assert!((band.bounds.height() - 600.0).abs() < 1e-9);
            assert_eq!(band.region, RegionKind::Front);
            assert!(set.get(ShadowKind::LeftFold).is_none());
        }
    }

    #[test]
    fn horizontal_width_respects_config() {
        let vp = viewport();
        let anchor = AnchorCorner::Right;
        let geo = FoldGeometry::fit(
            anchor.constrain(Point::new(100.0, 0.0), &vp),
            anchor.anchor_point(&vp),
            &vp,
        );
        let config = ShadowConfig {
            max_horizontal_width: 4.0,
            ..ShadowConfig::default()
        };
        let set = ShadowModel::new(&geo, anchor, vp).with_config(config).compute();
        let band = set.get(ShadowKind::HorizontalDrag).unwrap();
        assert!((band.extent - 4.0).abs() < 1e-9);
    }

    #[test]
    fn fold_bands_track_distances() {
        let vp = viewport();
        let anchor = AnchorCorner::BottomRight;
        let geo = FoldGeometry::fit(Point::new(240.0, 570.0), anchor.anchor_point(&vp), &vp);
        let set = ShadowModel::new(&geo, anchor, vp).compute();

        let left = set.get(ShadowKind::LeftFold).unwrap();
        assert!((left.bounds.width() - geo.l_shadow_dis() / 2.0).abs() < 1e-9);
        assert_eq!(left.pivot, geo.e());
        assert_eq!(left.gradient, GradientAxis::LeftToRight);
        let expected = (geo.e().x - geo.a().x).atan2(geo.a().y - geo.e().y);
        assert!((left.rotation - expected).abs() < 1e-12);

        let right = set.get(ShadowKind::RightFold).unwrap();
        assert!((right.bounds.height() - geo.r_shadow_dis() / 2.0).abs() < 1e-9);
        assert_eq!(right.pivot, geo.h());
        assert_eq!(right.gradient, GradientAxis::TopToBottom);

        let b = set.get(ShadowKind::BackFaceB).unwrap();
        assert!((b.bounds.width() - geo.reach() / 4.0).abs() < 1e-9);
        assert_eq!(b.region, RegionKind::Exposed);
        let c = set.get(ShadowKind::BackFaceC).unwrap();
        assert_eq!(c.region, RegionKind::Folded);
        assert!((b.rotation - c.rotation).abs() < 1e-12);
    }

    #[test]
    fn top_anchor_flips_orientation() {
        let set = shadows_for(Point::new(200.0, 120.0), AnchorCorner::TopRight);
        assert_eq!(
            set.get(ShadowKind::LeftFold).unwrap().gradient,
            GradientAxis::RightToLeft
        );
        assert_eq!(
            set.get(ShadowKind::RightFold).unwrap().gradient,
            GradientAxis::BottomToTop
        );
        assert_eq!(
            set.get(ShadowKind::BackFaceB).unwrap().gradient,
            GradientAxis::LeftToRight
        );
    }

    #[test]
    fn bands_move_continuously() {
        let anchor = AnchorCorner::BottomRight;
        let before = shadows_for(Point::new(180.0, 450.0), anchor);
        let after = shadows_for(Point::new(180.01, 450.01), anchor);
        for (x, y) in before.bands().iter().zip(after.bands()) {
            assert_eq!(x.kind, y.kind);
            assert!((x.rotation - y.rotation).abs() < 1e-3, "{:?}", x.kind);
            assert!((x.bounds.min - y.bounds.min).norm() < 0.1, "{:?}", x.kind);
            assert!((x.bounds.max - y.bounds.max).norm() < 0.1, "{:?}", x.kind);
            assert!((x.extent - y.extent).abs() < 0.1, "{:?}", x.kind);
        }
    }

    #[test]
    fn rotation_degrees_converts() {
        let set = shadows_for(Point::new(200.0, 480.0), AnchorCorner::BottomRight);
        let band = set.get(ShadowKind::RightFold).unwrap();
        assert!((band.rotation_degrees() - band.rotation.to_degrees()).abs() < 1e-12);
    }
}
