use crate::geometry::{AnchorCorner, Viewport};
use crate::math::Point;

/// Picks the anchor for a gesture from where it starts.
///
/// The viewport is split into thirds on both axes:
///
/// ```text
///   x <= W/3   |  W/3 < x <= 2W/3  |  x > 2W/3
/// -------------+-------------------+------------  y <= H/3
///     Left     |     TopRight      |  TopRight
/// -------------+-------------------+------------  y <= 2H/3
///     Left     |     (none)        |  Right
/// -------------+-------------------+------------
///     Left     |    BottomRight    |  BottomRight
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DragClassifier {
    viewport: Viewport,
}

impl DragClassifier {
    /// Creates a classifier for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Classifies a pointer-down position. `None` is the centre dead zone,
    /// where the gesture does not fold the page.
    #[must_use]
    pub fn classify(&self, down: Point) -> Option<AnchorCorner> {
        let third_w = self.viewport.width() / 3.0;
        let third_h = self.viewport.height() / 3.0;

        if down.x <= third_w {
            Some(AnchorCorner::Left)
        } else if down.y <= third_h {
            Some(AnchorCorner::TopRight)
        } else if down.y > 2.0 * third_h {
            Some(AnchorCorner::BottomRight)
        } else if down.x > 2.0 * third_w {
            Some(AnchorCorner::Right)
        } else {
            None
        }
    }
}
