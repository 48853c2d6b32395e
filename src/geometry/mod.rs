pub mod anchor;
pub mod fold;
pub mod outline;
pub mod viewport;

pub use anchor::{AnchorCorner, TurnDirection};
pub use fold::FoldGeometry;
pub use outline::{Outline, Segment, SegmentKind};
pub use viewport::Viewport;
