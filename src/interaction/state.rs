use std::time::Duration;

use tracing::debug;

use crate::config::CurlConfig;
use crate::geometry::{AnchorCorner, TurnDirection, Viewport};
use crate::math::Point;

use super::classify::DragClassifier;
use super::events::TurnEvent;
use super::pages::PageState;
use super::session::DragSession;
use super::trajectory::Trajectory;

/// Phase of the page-turn gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// No gesture; the page lies flat.
    Idle,
    /// The pointer is down and `a` follows it.
    Dragging,
    /// Animating towards the completed turn.
    Committing,
    /// Animating back to the resting corner.
    Cancelling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Commit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    anchor: AnchorCorner,
    outcome: Outcome,
    trajectory: Trajectory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Dragging(DragSession),
    Animating(Animation),
}

/// One sample of a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Interpolated drag point.
    pub point: Point,
    /// Whether the animation completed with this sample.
    pub finished: bool,
    /// Lifecycle event fired on completion.
    pub event: Option<TurnEvent>,
}

/// Drives a gesture through `Idle → Dragging → {Committing, Cancelling} → Idle`.
///
/// Holds no clock. Callers feed pointer events and then [`sample`] the
/// animation with the time elapsed since it started.
///
/// [`sample`]: TurnStateMachine::sample
#[derive(Debug, Clone)]
pub struct TurnStateMachine {
    config: CurlConfig,
    pages: PageState,
    gesture: Gesture,
    drag_point: Option<Point>,
}

impl TurnStateMachine {
    /// Creates an idle machine on the first of `page_count` pages.
    #[must_use]
    pub fn new(config: CurlConfig, page_count: usize) -> Self {
        Self {
            config,
            pages: PageState::new(page_count),
            gesture: Gesture::Idle,
            drag_point: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CurlConfig {
        &self.config
    }

    #[must_use]
    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    /// Mutable page bookkeeping, for jumps and page-count changes.
    pub fn pages_mut(&mut self) -> &mut PageState {
        &mut self.pages
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.gesture {
            Gesture::Idle => TurnPhase::Idle,
            Gesture::Dragging(_) => TurnPhase::Dragging,
            Gesture::Animating(Animation {
                outcome: Outcome::Commit,
                ..
            }) => TurnPhase::Committing,
            Gesture::Animating(Animation {
                outcome: Outcome::Cancel,
                ..
            }) => TurnPhase::Cancelling,
        }
    }

    /// Anchor of the active gesture, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<AnchorCorner> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(session) => Some(session.anchor()),
            Gesture::Animating(animation) => Some(animation.anchor),
        }
    }

    /// Current drag point `a`; `None` while idle.
    #[must_use]
    pub fn drag_point(&self) -> Option<Point> {
        self.drag_point
    }

    /// Active drag session, if the pointer is down.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.gesture {
            Gesture::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Running animation trajectory, if any.
    #[must_use]
    pub fn trajectory(&self) -> Option<&Trajectory> {
        match &self.gesture {
            Gesture::Animating(animation) => Some(&animation.trajectory),
            _ => None,
        }
    }

    /// Whether a commit or cancel animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.gesture, Gesture::Animating(_))
    }

    /// Handles pointer-down.
    ///
    /// Any in-flight animation is dropped without firing events. Returns the
    /// anchor of the new session, or `None` when the press lands in the
    /// dead zone and the gesture is ignored.
    pub fn begin(&mut self, down: Point, viewport: &Viewport) -> Option<AnchorCorner> {
        if let Gesture::Animating(animation) = self.gesture {
            debug!(outcome = ?animation.outcome, "animation interrupted by new gesture");
        }
        self.gesture = Gesture::Idle;
        self.drag_point = None;

        let anchor = DragClassifier::new(*viewport).classify(down)?;
        let session = DragSession::new(down, anchor, self.config.strong_drag_threshold());
        self.drag_point = Some(anchor.constrain(down, viewport));
        self.gesture = Gesture::Dragging(session);
        debug!(?anchor, x = down.x, y = down.y, "drag started");
        Some(anchor)
    }

    /// Handles pointer-move. Returns the constrained drag point, or `None`
    /// when no drag is active.
    pub fn drag_to(&mut self, pointer: Point, viewport: &Viewport) -> Option<Point> {
        let Gesture::Dragging(session) = &mut self.gesture else {
            return None;
        };
        session.update(pointer);
        let a = session.anchor().constrain(pointer, viewport);
        self.drag_point = Some(a);
        Some(a)
    }

    /// Handles pointer-up.
    ///
    /// A strong drag starts the commit animation, anything else snaps back.
    /// Returns the started trajectory, or `None` when no drag is active.
    pub fn release(&mut self, viewport: &Viewport) -> Option<Trajectory> {
        let session = *self.session()?;
        let outcome = if session.is_strong() {
            Outcome::Commit
        } else {
            Outcome::Cancel
        };
        debug!(travel = session.travel(), ?outcome, "drag released");
        self.start_animation(session.anchor(), outcome, viewport)
    }

    /// Handles a platform pointer-cancel: snaps back regardless of travel.
    pub fn cancel_gesture(&mut self, viewport: &Viewport) -> Option<Trajectory> {
        let session = *self.session()?;
        debug!(travel = session.travel(), "drag cancelled by platform");
        self.start_animation(session.anchor(), Outcome::Cancel, viewport)
    }

    /// Starts a programmatic page turn.
    ///
    /// Only honoured while idle and when the target page exists. Forward
    /// turns curl from the bottom-right corner, backward turns use the
    /// horizontal wipe.
    pub fn flip(&mut self, direction: TurnDirection, viewport: &Viewport) -> Option<Trajectory> {
        if self.gesture != Gesture::Idle || self.pages.target(direction).is_none() {
            debug!(?direction, phase = ?self.phase(), "flip ignored");
            return None;
        }
        let anchor = match direction {
            TurnDirection::Forward => AnchorCorner::BottomRight,
            TurnDirection::Backward => AnchorCorner::Left,
        };
        self.drag_point = Some(anchor.rest_point(viewport));
        self.start_animation(anchor, Outcome::Commit, viewport)
    }

    /// Samples the running animation `elapsed` after it started.
    ///
    /// On completion the page index is updated (commit only), the lifecycle
    /// event is returned and the machine drops back to idle.
    pub fn sample(&mut self, elapsed: Duration) -> Option<Sample> {
        let Gesture::Animating(animation) = self.gesture else {
            return None;
        };

        let point = animation.trajectory.position(elapsed);
        if !animation.trajectory.is_finished(elapsed) {
            self.drag_point = Some(point);
            return Some(Sample {
                point,
                finished: false,
                event: None,
            });
        }

        let event = match animation.outcome {
            Outcome::Commit => self.pages.advance(animation.anchor.direction()),
            Outcome::Cancel => TurnEvent::PageCancel,
        };
        self.gesture = Gesture::Idle;
        self.drag_point = None;
        debug!(?event, index = self.pages.current_index(), "turn finished");
        Some(Sample {
            point,
            finished: true,
            event: Some(event),
        })
    }

    /// Drops to idle, discarding any drag or animation without events.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.drag_point = None;
    }

    fn start_animation(
        &mut self,
        anchor: AnchorCorner,
        outcome: Outcome,
        viewport: &Viewport,
    ) -> Option<Trajectory> {
        let from = self.drag_point?;
        let (to, duration) = match outcome {
            Outcome::Commit => (anchor.commit_point(viewport), self.config.turn_duration),
            Outcome::Cancel => (anchor.rest_point(viewport), self.config.cancel_duration),
        };
        let trajectory = Trajectory::new(from, to, duration);
        self.gesture = Gesture::Animating(Animation {
            anchor,
            outcome,
            trajectory,
        });
        Some(trajectory)
    }
}
