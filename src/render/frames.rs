//! Page frames: where each page of the current page list sits on screen

use crate::geometry::PageGeometry;
use crate::Rect;
use serde::Serialize;

/// One page of the page list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrame {
    pub page_index: usize,
    /// 1-based number for labels
    pub page_number: usize,
    /// Whole page, in document coordinates
    pub bounds: Rect,
    /// Area body content flows into
    pub content: Rect,
    pub header: Option<Rect>,
    pub footer: Option<Rect>,
}

/// Stack `page_count` pages vertically, `gap` apart
pub fn build_frames(
    geometry: &PageGeometry,
    page_count: usize,
    header_reserve: f32,
    footer_reserve: f32,
    gap: f32,
) -> Vec<PageFrame> {
    let width = geometry.width();
    let height = geometry.height();
    let margin = geometry.margin();
    let stride = height + gap.max(0.0);

    (0..page_count.max(1))
        .map(|page_index| {
            let y = page_index as f32 * stride;
            let header = (header_reserve > 0.0).then(|| Rect::new(0.0, y, width, header_reserve));
            let footer = (footer_reserve > 0.0)
                .then(|| Rect::new(0.0, y + height - footer_reserve, width, footer_reserve));

            PageFrame {
                page_index,
                page_number: page_index + 1,
                bounds: Rect::new(0.0, y, width, height),
                content: Rect::new(
                    margin,
                    y + header_reserve,
                    (width - 2.0 * margin).max(0.0),
                    (height - header_reserve - footer_reserve).max(0.0),
                ),
                header,
                footer,
            }
        })
        .collect()
}

/// Frames intersecting the viewport
pub fn visible_frames(frames: &[PageFrame], viewport: Rect) -> impl Iterator<Item = &PageFrame> {
    frames
        .iter()
        .filter(move |frame| frame.bounds.intersects(&viewport))
}
