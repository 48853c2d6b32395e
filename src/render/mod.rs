pub mod frame;
pub mod mirror;
pub mod regions;
pub mod shadow;

pub use frame::Frame;
pub use mirror::MirrorTransform;
pub use regions::{Region, RegionBuilder, RegionKind, Regions};
pub use shadow::{GradientAxis, Rect, ShadowBand, ShadowKind, ShadowModel, ShadowSet};
