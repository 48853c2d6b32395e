use crate::geometry::{AnchorCorner, FoldGeometry, Outline, Viewport};
use crate::math::{midpoint, Point};

/// Identifies one of the three mutually exclusive screen areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Region A: the still-flat part of the current page.
    Front,
    /// Region B: the next (or previous) page showing through.
    Exposed,
    /// Region C: the mirrored back face of the curling paper.
    Folded,
}

/// A clip region handed to the rasterizer.
///
/// The rasterizer clips to `clip`, removes `exclude` from it when present,
/// and draws the layer's content. `visible` is the exact outline of that
/// difference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub clip: Outline,
    pub exclude: Option<Outline>,
    pub visible: Outline,
}

impl Region {
    /// A region that covers nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the region covers nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// On-screen area of the region.
    #[must_use]
    pub fn area(&self, viewport: &Viewport, tolerance: f64) -> f64 {
        self.visible.area_in(viewport, tolerance)
    }
}

/// The three regions of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Regions {
    pub front: Region,
    pub exposed: Region,
    pub folded: Region,
}

impl Regions {
    /// Regions of an unfolded page: the front covers the whole viewport.
    #[must_use]
    pub fn flat(viewport: &Viewport) -> Self {
        let full = Outline::rect(viewport);
        Self {
            front: Region {
                clip: full.clone(),
                exclude: None,
                visible: full,
            },
            exposed: Region::empty(),
            folded: Region::empty(),
        }
    }

    /// The regions in the order they must be drawn: front, exposed, folded.
    #[must_use]
    pub fn layers(&self) -> [(RegionKind, &Region); 3] {
        [
            (RegionKind::Front, &self.front),
            (RegionKind::Exposed, &self.exposed),
            (RegionKind::Folded, &self.folded),
        ]
    }

    /// Looks up a region by kind.
    #[must_use]
    pub fn get(&self, kind: RegionKind) -> &Region {
        match kind {
            RegionKind::Front => &self.front,
            RegionKind::Exposed => &self.exposed,
            RegionKind::Folded => &self.folded,
        }
    }
}

/// Builds the front, exposed and folded regions from a fold.
#[derive(Debug)]
pub struct RegionBuilder<'a> {
    geometry: &'a FoldGeometry,
    anchor: AnchorCorner,
    viewport: Viewport,
}

impl<'a> RegionBuilder<'a> {
    /// Creates a new region builder.
    #[must_use]
    pub fn new(geometry: &'a FoldGeometry, anchor: AnchorCorner, viewport: Viewport) -> Self {
        Self {
            geometry,
            anchor,
            viewport,
        }
    }

    /// Builds the regions.
    #[must_use]
    pub fn build(&self) -> Regions {
        if self.geometry.is_flat() {
            return Regions::flat(&self.viewport);
        }

        let front = self.front_outline();
        Regions {
            exposed: Region {
                clip: Outline::rect(&self.viewport),
                exclude: Some(front.clone()),
                visible: self.exposed_outline(),
            },
            folded: Region {
                clip: self.folded_outline(),
                exclude: Some(front.clone()),
                visible: self.folded_visible_outline(),
            },
            front: Region {
                clip: front.clone(),
                exclude: None,
                visible: front,
            },
        }
    }

    /// Region A: the two edges away from the fold, then the fold curve
    /// `c -> e -> b -> a -> k -> h -> j`.
    fn front_outline(&self) -> Outline {
        let geo = self.geometry;
        let w = self.viewport.width();
        // The horizontal edge opposite the anchor.
        let far_y = if self.anchor.is_top() {
            self.viewport.height()
        } else {
            0.0
        };
        let near_y = geo.f().y;

        Outline::begin(Point::new(0.0, far_y))
            .line_to(Point::new(0.0, near_y))
            .line_to(geo.c())
            .quad_to(geo.e(), geo.b())
            .line_to(geo.a())
            .line_to(geo.k())
            .quad_to(geo.h(), geo.j())
            .line_to(Point::new(w, far_y))
    }

    /// Viewport minus region A: the fold curve closed through the anchor.
    fn exposed_outline(&self) -> Outline {
        let geo = self.geometry;
        Outline::begin(geo.c())
            .quad_to(geo.e(), geo.b())
            .line_to(geo.a())
            .line_to(geo.k())
            .quad_to(geo.h(), geo.j())
            .line_to(geo.f())
    }

    /// Region C as drawn by the rasterizer, before region A is removed.
    fn folded_outline(&self) -> Outline {
        let geo = self.geometry;
        Outline::begin(geo.i())
            .line_to(geo.d())
            .line_to(geo.b())
            .line_to(geo.a())
            .line_to(geo.k())
    }

    /// Region C minus region A: the chords `d-b` and `k-i` replaced by the
    /// matching halves of the fold curves.
    fn folded_visible_outline(&self) -> Outline {
        let geo = self.geometry;
        Outline::begin(geo.i())
            .line_to(geo.d())
            .quad_to(midpoint(&geo.e(), &geo.b()), geo.b())
            .line_to(geo.a())
            .line_to(geo.k())
            .quad_to(midpoint(&geo.k(), &geo.h()), geo.i())
    }
}
