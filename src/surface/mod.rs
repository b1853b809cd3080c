//! Rendering surface contract and the content-height sampler

mod sampler;

pub use sampler::ContentSampler;

use crate::document::Block;
use crate::geometry::PageGeometry;
use serde::{Deserialize, Serialize};

/// Live style of the editable surface
///
/// Always pushed as one value so width and height never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceStyle {
    pub width: f32,
    pub min_height: f32,
    pub margin: f32,
}

impl SurfaceStyle {
    pub fn for_geometry(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.width(),
            min_height: geometry.height(),
            margin: geometry.margin(),
        }
    }

    /// Inline CSS for the editor element
    pub fn to_css(&self) -> String {
        format!(
            "padding-left:0px; padding-right:0px; min-height:{}px; width:{}px;",
            self.min_height, self.width
        )
    }
}

/// A DOM-like surface the content is laid out on
pub trait RenderSurface {
    /// Block until the surface has applied the latest committed `content`.
    /// Surfaces that lay out on their own (a browser DOM) do nothing here.
    fn settle(&mut self, _content: &[Block]) {}

    /// Post-layout height of everything on the surface
    fn rendered_height(&self) -> f32;

    /// Replace the live style in one step
    fn set_style(&mut self, style: SurfaceStyle);

    fn style(&self) -> SurfaceStyle;
}
