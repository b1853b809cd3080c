//! Headless layout: measures documents without a browser

pub mod font;
mod line_break;
mod surface;

pub use font::FontMetrics;
pub use line_break::{LineBox, LineBreaker};
pub use surface::{BlockLayout, LayoutSurface, DEFAULT_PADDING};
