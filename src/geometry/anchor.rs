use crate::math::Point;

use super::viewport::{Viewport, EDGE_INSET};

/// Which page the gesture turns towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    /// Towards the next page.
    Forward,
    /// Towards the previous page.
    Backward,
}

/// The fixed viewport corner or edge the fold pivots around.
///
/// The drag point `a` follows the pointer while the anchor point `f` stays
/// put for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorCorner {
    /// Horizontal wipe started in the left third; turns backwards.
    Left,
    /// Horizontal wipe started on the right edge.
    Right,
    /// Curl from the top-right corner.
    TopRight,
    /// Curl from the bottom-right corner.
    BottomRight,
}

impl AnchorCorner {
    /// All anchors in declaration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::TopRight, Self::BottomRight];

    /// Returns the anchor point `f` for this corner.
    #[must_use]
    pub fn anchor_point(self, viewport: &Viewport) -> Point {
        match self {
            Self::TopRight => Point::new(viewport.width(), 0.0),
            Self::Left | Self::Right | Self::BottomRight => {
                Point::new(viewport.width(), viewport.height())
            }
        }
    }

    /// Whether this is one of the horizontal wipe modes (no corner curl).
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether the anchor sits on the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopRight)
    }

    /// Page direction a committed gesture turns to.
    #[must_use]
    pub fn direction(self) -> TurnDirection {
        match self {
            Self::Left => TurnDirection::Backward,
            Self::Right | Self::TopRight | Self::BottomRight => TurnDirection::Forward,
        }
    }

    /// Maps a raw pointer position to the drag point `a`.
    ///
    /// The point is clamped to the viewport interior; horizontal modes also
    /// pin it one pixel above the bottom edge.
    #[must_use]
    pub fn constrain(self, pointer: Point, viewport: &Viewport) -> Point {
        let p = viewport.clamp_interior(pointer);
        if self.is_horizontal() {
            Point::new(p.x, self.edge_y(viewport))
        } else {
            p
        }
    }

    /// Where a cancelled gesture returns `a`: the anchor inset by one pixel
    /// on both axes.
    #[must_use]
    pub fn rest_point(self, viewport: &Viewport) -> Point {
        Point::new(viewport.width() - EDGE_INSET, self.edge_y(viewport))
    }

    /// Where a committed gesture sends `a`: a full page width past the far
    /// edge, one pixel inside the anchor's horizontal edge.
    #[must_use]
    pub fn commit_point(self, viewport: &Viewport) -> Point {
        Point::new(EDGE_INSET - viewport.width(), self.edge_y(viewport))
    }

    /// The y coordinate one pixel inside the anchor's horizontal edge.
    fn edge_y(self, viewport: &Viewport) -> f64 {
        if self.is_top() {
            EDGE_INSET
        } else {
            viewport.height() - EDGE_INSET
        }
    }
}
