//! Content-height sampler

use crate::document::DocumentModel;
use crate::surface::RenderSurface;

/// Measures the settled height of the document on a surface
///
/// Holds no state: every call lets the surface settle and reads the height
/// again, since content may have changed since the last call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSampler;

impl ContentSampler {
    pub fn new() -> Self {
        Self
    }

    /// Measure the content extent in surface units
    ///
    /// Non-finite or negative heights from a misbehaving surface are treated
    /// as an empty page.
    pub fn measure<D, S>(&self, document: &D, surface: &mut S) -> f32
    where
        D: DocumentModel + ?Sized,
        S: RenderSurface + ?Sized,
    {
        surface.settle(document.content());
        let height = surface.rendered_height();

        if height.is_finite() && height >= 0.0 {
            log::trace!("sampled content extent {height} at version {}", document.version());
            height
        } else {
            log::warn!("surface reported unusable height {height}, treating as empty");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Document};
    use crate::surface::SurfaceStyle;

    /// Surface whose height is the number of blocks it last settled on times 100
    struct CountingSurface {
        settled_blocks: usize,
        settle_calls: usize,
        style: SurfaceStyle,
    }

    impl RenderSurface for CountingSurface {
        fn settle(&mut self, content: &[Block]) {
            self.settled_blocks = content.len();
            self.settle_calls += 1;
        }

        fn rendered_height(&self) -> f32 {
            self.settled_blocks as f32 * 100.0
        }

        fn set_style(&mut self, style: SurfaceStyle) {
            self.style = style;
        }

        fn style(&self) -> SurfaceStyle {
            self.style
        }
    }

    fn surface() -> CountingSurface {
        CountingSurface {
            settled_blocks: 0,
            settle_calls: 0,
            style: SurfaceStyle {
                width: 816.0,
                min_height: 1056.0,
                margin: 96.0,
            },
        }
    }

    #[test]
    fn test_measures_latest_content() {
        let sampler = ContentSampler::new();
        let mut surface = surface();
        let mut doc = Document::from_text("a\nb");

        assert_eq!(sampler.measure(&doc, &mut surface), 200.0);

        doc.push_block(Block::paragraph("c"));
        assert_eq!(sampler.measure(&doc, &mut surface), 300.0);
        assert_eq!(surface.settle_calls, 2);
    }

    struct BrokenSurface(f32);

    impl RenderSurface for BrokenSurface {
        fn rendered_height(&self) -> f32 {
            self.0
        }

        fn set_style(&mut self, _style: SurfaceStyle) {}

        fn style(&self) -> SurfaceStyle {
            SurfaceStyle {
                width: 0.0,
                min_height: 0.0,
                margin: 0.0,
            }
        }
    }

    #[test]
    fn test_unusable_height_is_empty() {
        let sampler = ContentSampler::new();
        let doc = Document::new();
        assert_eq!(sampler.measure(&doc, &mut BrokenSurface(f32::NAN)), 0.0);
        assert_eq!(sampler.measure(&doc, &mut BrokenSurface(-5.0)), 0.0);
        assert_eq!(sampler.measure(&doc, &mut BrokenSurface(42.0)), 42.0);
    }
}
