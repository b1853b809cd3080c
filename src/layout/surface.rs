//! Headless rendering surface

use crate::document::{Block, PageBreakMarker, RenderMode};
use crate::geometry::PageGeometry;
use crate::layout::font::FontMetrics;
use crate::layout::line_break::LineBreaker;
use crate::surface::{RenderSurface, SurfaceStyle};

/// Padding above and below the content inside the editor element
pub const DEFAULT_PADDING: f32 = 40.0;

/// Laid-out height of one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// Top edge relative to the start of the content
    pub y: f32,
    pub height: f32,
    pub line_count: usize,
}

/// Lays out blocks in memory the way the editor element would
///
/// Text wraps at the style's width minus both margins. Page-break markers
/// take the height of their box in the current [`RenderMode`].
#[derive(Debug, Clone)]
pub struct LayoutSurface {
    style: SurfaceStyle,
    metrics: FontMetrics,
    mode: RenderMode,
    padding: f32,
    line_breaker: LineBreaker,
    blocks: Vec<BlockLayout>,
    content_height: f32,
}

impl LayoutSurface {
    pub fn new(geometry: &PageGeometry) -> Self {
        Self::with_metrics(geometry, FontMetrics::default())
    }

    pub fn with_metrics(geometry: &PageGeometry, metrics: FontMetrics) -> Self {
        Self {
            style: SurfaceStyle::for_geometry(geometry),
            metrics,
            mode: RenderMode::Screen,
            padding: DEFAULT_PADDING,
            line_breaker: LineBreaker::new(),
            blocks: Vec::new(),
            content_height: 2.0 * DEFAULT_PADDING,
        }
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding.max(0.0);
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Width text wraps at
    pub fn content_width(&self) -> f32 {
        (self.style.width - 2.0 * self.style.margin).max(0.0)
    }

    /// Per-block results of the last settle
    pub fn block_layouts(&self) -> &[BlockLayout] {
        &self.blocks
    }

    fn layout_block(&self, block: &Block) -> (f32, usize) {
        if block.is_page_break() {
            return (PageBreakMarker::render(self.mode).height(), 0);
        }

        let line_height = self.metrics.line_height * block.kind.line_height_multiplier();
        let lines = self
            .line_breaker
            .break_lines(block.text(), &self.metrics, self.content_width())
            .len();
        let spacing = block.kind.spacing_after() * self.metrics.line_height;

        (lines as f32 * line_height + spacing, lines)
    }
}

impl RenderSurface for LayoutSurface {
    fn settle(&mut self, content: &[Block]) {
        let mut blocks = Vec::with_capacity(content.len());
        let mut y: f32 = 0.0;

        for block in content {
            let (height, line_count) = self.layout_block(block);
            blocks.push(BlockLayout {
                y,
                height,
                line_count,
            });
            y += height;
        }

        self.blocks = blocks;
        self.content_height = y + 2.0 * self.padding;
    }

    fn rendered_height(&self) -> f32 {
        self.content_height
    }

    fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }

    fn style(&self) -> SurfaceStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::document::DocumentModel;

    fn a4() -> PageGeometry {
        PageGeometry::new("A4", 816.0, 1056.0, 96.0).unwrap()
    }

    fn surface() -> LayoutSurface {
        let mut surface = LayoutSurface::with_metrics(&a4(), FontMetrics::monospace(20.0, 10.0));
        surface.set_padding(0.0);
        surface
    }

    #[test]
    fn test_empty_paragraph() {
        let mut surface = surface();
        surface.settle(Document::new().content());
        // One line plus one line of spacing
        assert_eq!(surface.rendered_height(), 40.0);
    }

    #[test]
    fn test_wrapping_grows_height() {
        let mut surface = surface();
        assert_eq!(surface.content_width(), 624.0);

        // 100 words of 9 chars + space = 1000 chars, 62 chars per line
        let text = "abcdefghi ".repeat(100);
        let doc = Document::from_text(&text);
        surface.settle(doc.content());

        let layout = surface.block_layouts()[0];
        assert!(layout.line_count > 1);
        assert_eq!(layout.height, layout.line_count as f32 * 20.0 + 20.0);
    }

    #[test]
    fn test_marker_height_depends_on_mode() {
        let mut doc = Document::from_text("a");
        doc.push_block(Block::page_break());
        let mut surface = surface();

        surface.settle(doc.content());
        assert_eq!(surface.block_layouts()[1].height, 112.0);
        assert_eq!(surface.block_layouts()[1].y, 40.0);

        surface.set_mode(RenderMode::Print);
        surface.settle(doc.content());
        assert_eq!(surface.block_layouts()[1].height, 0.0);
    }

    #[test]
    fn test_narrower_style_wraps_more() {
        let text = "word ".repeat(400);
        let doc = Document::from_text(&text);
        let mut surface = surface();
        surface.settle(doc.content());
        let wide = surface.rendered_height();

        let a5 = PageGeometry::new("A5", 595.0, 842.0, 71.0).unwrap();
        surface.set_style(SurfaceStyle::for_geometry(&a5));
        surface.settle(doc.content());
        assert!(surface.rendered_height() > wide);
    }

    #[test]
    fn test_heading_is_taller() {
        let mut surface = surface();
        surface.settle(&[Block::heading(1, "Title")]);
        // 1.5x line height plus half a line of spacing
        assert_eq!(surface.rendered_height(), 40.0);
    }
}
