use crate::config::CurlConfig;
use crate::geometry::{AnchorCorner, FoldGeometry, Viewport};
use crate::interaction::PageState;

use super::mirror::MirrorTransform;
use super::regions::{RegionBuilder, Regions};
use super::shadow::{ShadowModel, ShadowSet};

/// Everything the rasterizer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub geometry: FoldGeometry,
    /// Anchor of the active gesture; `None` when the page lies flat.
    pub anchor: Option<AnchorCorner>,
    pub regions: Regions,
    pub shadows: ShadowSet,
    /// Maps page content onto the folded back face.
    pub mirror: MirrorTransform,
    /// Brightness factor for the folded back face.
    pub back_face_dim: f64,
    /// Page drawn in the front region.
    pub current_page: usize,
    /// Page showing through the exposed region, if it exists.
    pub target_page: Option<usize>,
}

impl Frame {
    /// Assembles the render parameters for `geometry`.
    ///
    /// Without an anchor, or with flat geometry, the front region covers
    /// the viewport and there are no shadows.
    #[must_use]
    pub fn compose(
        geometry: FoldGeometry,
        anchor: Option<AnchorCorner>,
        viewport: &Viewport,
        pages: &PageState,
        config: &CurlConfig,
    ) -> Self {
        let base = Self {
            geometry,
            anchor,
            regions: Regions::flat(viewport),
            shadows: ShadowSet::default(),
            mirror: MirrorTransform::identity(),
            back_face_dim: config.shadow.back_face_dim,
            current_page: pages.current_index(),
            target_page: None,
        };

        let Some(anchor) = anchor else {
            return base;
        };
        if geometry.is_flat() {
            return base;
        }

        Self {
            regions: RegionBuilder::new(&geometry, anchor, *viewport).build(),
            shadows: ShadowModel::new(&geometry, anchor, *viewport)
                .with_config(config.shadow)
                .compute(),
            mirror: MirrorTransform::from_geometry(&geometry),
            target_page: pages.target(anchor.direction()),
            ..base
        }
    }

    /// Whether the frame shows a fold.
    #[must_use]
    pub fn is_folded(&self) -> bool {
        self.anchor.is_some() && !self.geometry.is_flat()
    }
}
