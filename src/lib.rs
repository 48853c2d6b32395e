pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod pager;
pub mod render;

pub use config::{CurlConfig, ShadowConfig};
pub use error::{CurlError, Result};
pub use geometry::{AnchorCorner, FoldGeometry, TurnDirection, Viewport};
pub use interaction::{PageTurnListener, TurnEvent, TurnPhase};
pub use pager::PageCurl;
pub use render::Frame;
