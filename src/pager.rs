//! Single entry point that wires pointer input, the turn state machine and
//! fold geometry together.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::CurlConfig;
use crate::error::Result;
use crate::geometry::{AnchorCorner, FoldGeometry, TurnDirection, Viewport};
use crate::interaction::{PageTurnListener, TurnEvent, TurnPhase, TurnStateMachine};
use crate::math::Point;
use crate::render::Frame;

/// A page-curling pager.
///
/// Owns the one live [`FoldGeometry`], refreshed on every input event and
/// animation tick. The rasterizer reads it back through [`PageCurl::frame`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use dogear::{CurlConfig, PageCurl, TurnEvent, Viewport};
///
/// let viewport = Viewport::new(300.0, 600.0)?;
/// let mut curl = PageCurl::new(viewport, 3, CurlConfig::default())?;
///
/// curl.on_pointer_down(290.0, 590.0);
/// curl.on_pointer_move(100.0, 400.0);
/// curl.on_pointer_up();
///
/// assert_eq!(curl.tick(Duration::from_millis(400)), Some(TurnEvent::PageNext));
/// assert_eq!(curl.current_index(), 1);
/// # Ok::<(), dogear::CurlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PageCurl {
    viewport: Viewport,
    machine: TurnStateMachine,
    geometry: FoldGeometry,
}

impl PageCurl {
    /// Creates an idle pager on the first of `page_count` pages.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config` fails validation.
    pub fn new(viewport: Viewport, page_count: usize, config: CurlConfig) -> Result<Self> {
        config.validate()?;
        info!(
            width = viewport.width(),
            height = viewport.height(),
            page_count,
            "page curl created"
        );
        Ok(Self {
            viewport,
            machine: TurnStateMachine::new(config, page_count),
            geometry: rest_geometry(&viewport),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &CurlConfig {
        self.machine.config()
    }

    /// The current fold geometry; flat at the bottom-right corner when idle.
    #[must_use]
    pub fn geometry(&self) -> &FoldGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn anchor(&self) -> Option<AnchorCorner> {
        self.machine.anchor()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.machine.phase()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    /// Handles pointer-down. Returns whether the press started a drag.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> bool {
        let started = self
            .machine
            .begin(Point::new(x, y), &self.viewport)
            .is_some();
        self.refresh();
        started
    }

    /// Handles pointer-move. Ignored unless a drag is active.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self
            .machine
            .drag_to(Point::new(x, y), &self.viewport)
            .is_some()
        {
            self.refresh();
        }
    }

    /// Handles pointer-up, starting the commit or snap-back animation.
    pub fn on_pointer_up(&mut self) {
        self.machine.release(&self.viewport);
    }

    /// Handles a platform pointer-cancel.
    pub fn on_pointer_cancel(&mut self) {
        self.machine.cancel_gesture(&self.viewport);
    }

    /// Applies a new viewport size, abandoning any gesture in progress.
    pub fn resize(&mut self, viewport: Viewport) {
        debug!(
            width = viewport.width(),
            height = viewport.height(),
            "viewport resized"
        );
        self.viewport = viewport;
        self.machine.reset();
        self.refresh();
    }

    /// Advances the running animation to `elapsed` since it started.
    ///
    /// Returns the lifecycle event when the animation completes.
    pub fn tick(&mut self, elapsed: Duration) -> Option<TurnEvent> {
        let sample = self.machine.sample(elapsed)?;
        self.refresh();
        sample.event
    }

    /// Like [`PageCurl::tick`], but dispatches the event to `listener`.
    /// Returns whether an animation is still running.
    pub fn tick_with<L: PageTurnListener + ?Sized>(
        &mut self,
        elapsed: Duration,
        listener: &mut L,
    ) -> bool {
        if let Some(event) = self.tick(elapsed) {
            event.dispatch(listener);
        }
        self.is_animating()
    }

    /// Render parameters for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::compose(
            self.geometry,
            self.machine.anchor(),
            &self.viewport,
            self.machine.pages(),
            self.machine.config(),
        )
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.machine.pages().page_count()
    }

    /// Replaces the page count, returning to the first page and abandoning
    /// any gesture.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.machine.reset();
        self.machine.pages_mut().reset(page_count);
        self.refresh();
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.machine.pages().current_index()
    }

    /// Jumps to `index` without animating.
    ///
    /// # Errors
    ///
    /// Returns `PageError::IndexOutOfRange` if `index` is not a valid page.
    pub fn set_current_index(&mut self, index: usize) -> Result<()> {
        self.machine.pages_mut().set_current_index(index)
    }

    /// Starts an animated turn to the next page. Returns whether it started.
    pub fn flip_to_next(&mut self) -> bool {
        self.flip(TurnDirection::Forward)
    }

    /// Starts an animated turn to the previous page. Returns whether it
    /// started.
    pub fn flip_to_previous(&mut self) -> bool {
        self.flip(TurnDirection::Backward)
    }

    fn flip(&mut self, direction: TurnDirection) -> bool {
        let started = self.machine.flip(direction, &self.viewport).is_some();
        self.refresh();
        started
    }

    fn refresh(&mut self) {
        self.geometry = match (self.machine.anchor(), self.machine.drag_point()) {
            (Some(anchor), Some(a)) => {
                FoldGeometry::fit(a, anchor.anchor_point(&self.viewport), &self.viewport)
            }
            _ => rest_geometry(&self.viewport),
        };
    }
}

fn rest_geometry(viewport: &Viewport) -> FoldGeometry {
    FoldGeometry::flat(Point::new(viewport.width(), viewport.height()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, CurlError, PageError};

    const END: Duration = Duration::from_millis(400);

    fn curl(page_count: usize) -> PageCurl {
        PageCurl::new(
            Viewport::new(300.0, 600.0).unwrap(),
            page_count,
            CurlConfig::default(),
        )
        .unwrap()
    }

    #[derive(Default)]
    struct Log {
        next: usize,
        previous: usize,
        first: usize,
        last: usize,
        cancel: usize,
    }

    impl PageTurnListener for Log {
        fn on_page_pre(&mut self) {
            self.previous += 1;
        }

        fn on_page_next(&mut self) {
            self.next += 1;
        }

        fn on_first_page(&mut self) {
            self.first += 1;
        }

        fn on_last_page(&mut self) {
            self.last += 1;
        }

        fn on_page_cancel(&mut self) {
            self.cancel += 1;
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let result = PageCurl::new(
            Viewport::new(300.0, 600.0).unwrap(),
            3,
            CurlConfig::default().with_strong_drag_factor(-1.0),
        );
        assert!(matches!(
            result,
            Err(CurlError::Config(ConfigError::NonPositive { .. }))
        ));
    }

    #[test]
    fn idle_geometry_is_flat() {
        let c = curl(3);
        assert!(c.geometry().is_flat());
        assert_eq!(c.phase(), TurnPhase::Idle);
        assert!(!c.frame().is_folded());
    }

    #[test]
    fn drag_folds_the_page() {
        let mut c = curl(3);
        assert!(c.on_pointer_down(290.0, 590.0));
        c.on_pointer_move(150.0, 450.0);
        assert_eq!(c.phase(), TurnPhase::Dragging);
        assert_eq!(c.geometry().a(), Point::new(150.0, 450.0));
        assert_eq!(c.geometry().f(), Point::new(300.0, 600.0));
        let frame = c.frame();
        assert!(frame.is_folded());
        assert_eq!(frame.target_page, Some(1));
    }

    #[test]
    fn dead_zone_press_does_nothing() {
        let mut c = curl(3);
        assert!(!c.on_pointer_down(150.0, 300.0));
        c.on_pointer_move(10.0, 10.0);
        c.on_pointer_up();
        assert_eq!(c.phase(), TurnPhase::Idle);
        assert!(c.geometry().is_flat());
        assert_eq!(c.tick(END), None);
    }

    #[test]
    fn full_turn_notifies_listener_once() {
        let mut c = curl(3);
        let mut log = Log::default();
        c.on_pointer_down(290.0, 550.0);
        c.on_pointer_move(100.0, 400.0);
        c.on_pointer_up();
        assert_eq!(c.phase(), TurnPhase::Committing);

        for ms in (0..400).step_by(16) {
            assert!(c.tick_with(Duration::from_millis(ms), &mut log));
            assert!(c.geometry().is_finite());
        }
        assert!(!c.tick_with(END, &mut log));
        assert!(!c.tick_with(END, &mut log));

        assert_eq!(log.next, 1);
        assert_eq!(log.previous + log.first + log.last + log.cancel, 0);
        assert_eq!(c.current_index(), 1);
        assert!(c.geometry().is_flat());
    }

    #[test]
    fn commit_overshoot_stays_inside() {
        let mut c = curl(3);
        c.on_pointer_down(290.0, 550.0);
        c.on_pointer_move(20.0, 580.0);
        c.on_pointer_up();
        c.tick(Duration::from_millis(399));
        let geometry = c.geometry();
        assert!(geometry.is_finite());
        assert!(geometry.c().x >= -1e-6, "c={}", geometry.c());
    }

    #[test]
    fn weak_release_cancels() {
        let mut c = curl(3);
        let mut log = Log::default();
        c.on_pointer_down(290.0, 590.0);
        c.on_pointer_move(285.0, 585.0);
        c.on_pointer_up();
        assert_eq!(c.phase(), TurnPhase::Cancelling);
        c.tick_with(END, &mut log);
        assert_eq!(log.cancel, 1);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn resize_resets_gesture() {
        let mut c = curl(3);
        c.on_pointer_down(290.0, 590.0);
        c.on_pointer_move(150.0, 450.0);
        c.resize(Viewport::new(400.0, 800.0).unwrap());
        assert_eq!(c.phase(), TurnPhase::Idle);
        assert!(c.geometry().is_flat());
        assert_eq!(c.geometry().f(), Point::new(400.0, 800.0));
        assert!(!c.frame().is_folded());
    }

    #[test]
    fn page_count_and_index() {
        let mut c = curl(3);
        c.set_current_index(2).unwrap();
        assert_eq!(c.current_index(), 2);
        assert!(matches!(
            c.set_current_index(3),
            Err(CurlError::Page(PageError::IndexOutOfRange { .. }))
        ));

        c.set_page_count(7);
        assert_eq!(c.page_count(), 7);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn flip_next_and_previous() {
        let mut c = curl(2);
        assert!(!c.flip_to_previous());
        assert!(c.flip_to_next());
        assert_eq!(c.phase(), TurnPhase::Committing);
        assert!(!c.flip_to_next());
        assert_eq!(c.tick(END), Some(TurnEvent::PageNext));
        assert_eq!(c.current_index(), 1);

        assert!(!c.flip_to_next());
        assert!(c.flip_to_previous());
        assert_eq!(c.tick(END), Some(TurnEvent::PagePrevious));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn pointer_down_interrupts_flip() {
        let mut c = curl(3);
        assert!(c.flip_to_next());
        c.tick(Duration::from_millis(120));
        assert!(c.on_pointer_down(200.0, 50.0));
        assert_eq!(c.anchor(), Some(AnchorCorner::TopRight));
        assert_eq!(c.geometry().f(), Point::new(300.0, 0.0));
        assert_eq!(c.tick(END), None);
        assert_eq!(c.current_index(), 0);
    }
}
