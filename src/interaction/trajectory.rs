use std::time::Duration;

use crate::math::Point;

/// Straight-line motion of the drag point over a fixed duration.
///
/// A pure function of elapsed time; the caller owns the clock and samples
/// it once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    from: Point,
    to: Point,
    duration: Duration,
}

impl Trajectory {
    /// Creates a new trajectory.
    #[must_use]
    pub fn new(from: Point, to: Point, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    #[must_use]
    pub fn from(&self) -> Point {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Point {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the motion completed after `elapsed`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Position after `elapsed`; linear in time, holding at `to` once done.
    #[must_use]
    pub fn position(&self, elapsed: Duration) -> Point {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * t
    }

    /// Whether the motion has completed after `elapsed`.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory() -> Trajectory {
        Trajectory::new(
            Point::new(100.0, 500.0),
            Point::new(299.0, 599.0),
            Duration::from_millis(400),
        )
    }

    #[test]
    fn endpoints() {
        let t = trajectory();
        assert_eq!(t.position(Duration::ZERO), t.from());
        assert_eq!(t.position(Duration::from_millis(400)), t.to());
        assert_eq!(t.position(Duration::from_secs(10)), t.to());
    }

    #[test]
    fn linear_midpoint() {
        let p = trajectory().position(Duration::from_millis(200));
        assert!((p.x - 199.5).abs() < 1e-9, "p={p}");
        assert!((p.y - 549.5).abs() < 1e-9, "p={p}");
    }

    #[test]
    fn progress_is_monotonic() {
        let t = trajectory();
        let mut previous = -1.0;
        for ms in (0..=400).step_by(16) {
            let progress = t.progress(Duration::from_millis(ms));
            assert!(progress > previous);
            previous = progress;
        }
    }

    #[test]
    fn finished_only_at_duration() {
        let t = trajectory();
        assert!(!t.is_finished(Duration::from_millis(399)));
        assert!(t.is_finished(Duration::from_millis(400)));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let t = Trajectory::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0), Duration::ZERO);
        assert_eq!(t.position(Duration::ZERO), Point::new(5.0, 5.0));
        assert!(t.is_finished(Duration::ZERO));
    }
}
