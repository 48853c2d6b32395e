use crate::geometry::AnchorCorner;
use crate::math::Point;

/// One pointer gesture from down to release.
///
/// Tracks the total distance travelled by the pointer; once it exceeds the
/// threshold the drag is strong and will commit on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    anchor: AnchorCorner,
    start: Point,
    last: Point,
    travel: f64,
    threshold: f64,
}

impl DragSession {
    /// Starts a session at `start`.
    #[must_use]
    pub fn new(start: Point, anchor: AnchorCorner, threshold: f64) -> Self {
        Self {
            anchor,
            start,
            last: start,
            travel: 0.0,
            threshold,
        }
    }

    /// Records a pointer move and returns the distance covered by it.
    pub fn update(&mut self, pointer: Point) -> f64 {
        let step = (pointer - self.last).norm();
        if step.is_finite() {
            self.travel += step;
        }
        self.last = pointer;
        step
    }

    #[must_use]
    pub fn anchor(&self) -> AnchorCorner {
        self.anchor
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Last raw pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Accumulated pointer travel since the session started.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// Whether the travel has exceeded the strong-drag threshold.
    #[must_use]
    pub fn is_strong(&self) -> bool {
        self.travel > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_weak() {
        let session = DragSession::new(Point::new(10.0, 10.0), AnchorCorner::BottomRight, 64.0);
        assert!(!session.is_strong());
        assert!(session.travel().abs() < f64::EPSILON);
        assert_eq!(session.last(), session.start());
    }

    #[test]
    fn travel_accumulates_path_length() {
        let mut session = DragSession::new(Point::new(0.0, 0.0), AnchorCorner::Right, 64.0);
        session.update(Point::new(30.0, 40.0));
        session.update(Point::new(0.0, 0.0));
        // Back at the start, but the path covered 100 px.
        assert!((session.travel() - 100.0).abs() < 1e-12);
        assert!(session.is_strong());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut session = DragSession::new(Point::new(0.0, 0.0), AnchorCorner::Left, 10.0);
        session.update(Point::new(10.0, 0.0));
        assert!(!session.is_strong());
        session.update(Point::new(10.5, 0.0));
        assert!(session.is_strong());
    }
}
