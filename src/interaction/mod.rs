pub mod classify;
pub mod events;
pub mod pages;
pub mod session;
pub mod state;
pub mod trajectory;

pub use classify::DragClassifier;
pub use events::{PageTurnListener, TurnEvent};
pub use pages::PageState;
pub use session::DragSession;
pub use state::{Sample, TurnPhase, TurnStateMachine};
pub use trajectory::Trajectory;
