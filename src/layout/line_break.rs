//! Line breaking algorithm

use crate::layout::font::FontMetrics;
use std::ops::Range;
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

/// One laid-out line of a block
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    /// Byte range within the block's text
    pub byte_range: Range<usize>,
    /// Advance width including trailing whitespace
    pub width: f32,
}

/// Greedy line breaker over UAX #14 break opportunities
#[derive(Debug, Default, Clone, Copy)]
pub struct LineBreaker;

impl LineBreaker {
    pub fn new() -> Self {
        Self
    }

    /// Break `text` into lines no wider than `max_width`. Words wider than a
    /// whole line are split between grapheme clusters. Empty text still
    /// produces one line.
    pub fn break_lines(&self, text: &str, metrics: &FontMetrics, max_width: f32) -> Vec<LineBox> {
        let mut lines = Vec::new();
        if text.is_empty() {
            lines.push(LineBox {
                byte_range: 0..0,
                width: 0.0,
            });
            return lines;
        }

        let mut line_start = 0;
        let mut line_width: f32 = 0.0;
        let mut seg_start = 0;

        for (pos, opportunity) in linebreaks(text) {
            let segment = &text[seg_start..pos];
            // Trailing spaces may hang past the edge
            let visible = metrics.text_width(segment.trim_end());

            // Soft wrap before this segment
            if line_width + visible > max_width && seg_start > line_start {
                lines.push(LineBox {
                    byte_range: line_start..seg_start,
                    width: line_width,
                });
                line_start = seg_start;
                line_width = 0.0;
            }

            if visible > max_width {
                // Emergency break inside an overlong word
                for (idx, grapheme) in segment.grapheme_indices(true) {
                    let w = metrics.text_width(grapheme);
                    if line_width + w > max_width && line_width > 0.0 {
                        lines.push(LineBox {
                            byte_range: line_start..seg_start + idx,
                            width: line_width,
                        });
                        line_start = seg_start + idx;
                        line_width = 0.0;
                    }
                    line_width += w;
                }
            } else {
                line_width += metrics.text_width(segment);
            }

            seg_start = pos;

            if matches!(opportunity, BreakOpportunity::Mandatory) {
                lines.push(LineBox {
                    byte_range: line_start..pos,
                    width: line_width,
                });
                line_start = pos;
                line_width = 0.0;
            }
        }

        if lines.is_empty() {
            lines.push(LineBox {
                byte_range: 0..text.len(),
                width: line_width,
            });
        }

        lines
    }
}
