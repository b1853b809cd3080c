//! Page-break marker: insertion, screen/print box, and HTML form
//!
//! On screen a marker draws three stacked strips so the user sees the
//! bottom of one page, a gap, and the top of the next:
//!
//! ```text
//! margin        24
//! page end      16   white strip with a 1px rule on its bottom edge
//! gap           32   editor background, side rules only
//! page start    16   white strip with a 1px rule on its top edge
//! margin        24
//! ```
//!
//! In print the marker takes no height at all and forces a hard break after
//! itself.

use crate::document::{BlockKind, Caret, DocumentModel};
use crate::error::Result;
use smallvec::SmallVec;

/// Vertical margin above and below the marker on screen
pub const SCREEN_MARGIN: f32 = 24.0;
/// Height of the end-of-page and start-of-page strips
pub const EDGE_STRIP_HEIGHT: f32 = 16.0;
/// Height of the inter-page gap strip
pub const GAP_STRIP_HEIGHT: f32 = 32.0;

/// Value of the `data-type` attribute identifying a marker element
pub const HTML_DATA_TYPE: &str = "page-break";
/// Class carried by every serialized marker
pub const HTML_CLASS: &str = "page-break";
/// Keyboard shortcut requesting a manual break
pub const SHORTCUT: &str = "Mod-Enter";

/// Which layout the marker is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Interactive editing on screen
    #[default]
    Screen,
    /// Print or export
    Print,
}

/// One horizontal strip of the on-screen marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    /// Shadow closing the previous page
    PageEnd,
    /// Background between pages
    Gap,
    /// Shadow opening the next page
    PageStart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerBand {
    pub kind: BandKind,
    pub height: f32,
}

/// Rendered box of a marker for a given mode
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBox {
    pub bands: SmallVec<[MarkerBand; 3]>,
    /// Margin above and below the bands
    pub margin: f32,
    /// Whether the content after the marker starts on a fresh page
    pub break_after: bool,
}

impl MarkerBox {
    /// Total vertical space the marker occupies in the flow
    pub fn height(&self) -> f32 {
        self.bands.iter().map(|b| b.height).sum::<f32>() + 2.0 * self.margin
    }

    /// Markers never take horizontal space in the text flow
    pub fn width(&self) -> f32 {
        0.0
    }
}

/// Block-level page boundary
#[derive(Debug, Clone, Copy, Default)]
pub struct PageBreakMarker;

impl PageBreakMarker {
    /// Insert a marker at `caret`. A rejection from the document is returned unchanged.
    pub fn insert_at<D>(document: &mut D, caret: Caret) -> Result<usize>
    where
        D: DocumentModel + ?Sized,
    {
        document.insert_block(BlockKind::PageBreak, caret)
    }

    /// Box the marker occupies in the given mode
    pub fn render(mode: RenderMode) -> MarkerBox {
        match mode {
            RenderMode::Screen => MarkerBox {
                bands: smallvec::smallvec![
                    MarkerBand {
                        kind: BandKind::PageEnd,
                        height: EDGE_STRIP_HEIGHT,
                    },
                    MarkerBand {
                        kind: BandKind::Gap,
                        height: GAP_STRIP_HEIGHT,
                    },
                    MarkerBand {
                        kind: BandKind::PageStart,
                        height: EDGE_STRIP_HEIGHT,
                    },
                ],
                margin: SCREEN_MARGIN,
                break_after: false,
            },
            RenderMode::Print => MarkerBox {
                bands: SmallVec::new(),
                margin: 0.0,
                break_after: true,
            },
        }
    }

    /// Serialize to HTML, merging extra attributes. Classes are concatenated,
    /// other duplicate attributes take the later value.
    pub fn to_html(extra: &[(&str, &str)]) -> String {
        let mut attrs: Vec<(String, String)> = Vec::new();
        let fixed = [("data-type", HTML_DATA_TYPE), ("class", HTML_CLASS)];

        for &(key, value) in extra.iter().chain(fixed.iter()) {
            match attrs.iter_mut().find(|(k, _)| k == key) {
                Some((_, existing)) if key == "class" => {
                    if !existing.split_whitespace().any(|c| c == value) {
                        existing.push(' ');
                        existing.push_str(value);
                    }
                }
                Some((_, existing)) => *existing = value.to_string(),
                None => attrs.push((key.to_string(), value.to_string())),
            }
        }

        let mut html = String::from("<div");
        for (key, value) in &attrs {
            html.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
        }
        html.push_str("></div>");
        html
    }

    /// Whether an element parsed from HTML is a marker
    pub fn matches_html(tag: &str, attrs: &[(&str, &str)]) -> bool {
        tag.eq_ignore_ascii_case("div")
            && attrs
                .iter()
                .any(|&(k, v)| k == "data-type" && v == HTML_DATA_TYPE)
    }

    /// Whether a key press is the manual page-break shortcut. `primary_modifier`
    /// is Ctrl on Linux/Windows and Cmd on macOS.
    pub fn is_shortcut(key: &str, primary_modifier: bool) -> bool {
        primary_modifier && key == "Enter"
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
