//! Page-Flow: dynamic pagination for a browser-based rich-text editor
//!
//! This crate reflows free-form document content into fixed-size pages:
//! - Page geometry catalog (A4, Letter, Legal, ...) with atomic switching
//! - Page-break markers with distinct screen and print boxes
//! - Content-height sampling against a pluggable rendering surface
//! - A pure page-count calculator honoring header/footer reservations
//! - A single-flight reflow coordinator that coalesces event storms

pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod overlay;
pub mod pagination;
pub mod reflow;
pub mod render;
pub mod surface;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use document::{Block, BlockKind, Caret, Document, DocumentModel, PageBreakMarker, RenderMode};
pub use error::{PaginationError, Result};
pub use geometry::{GeometryRegistry, PageGeometry};
pub use layout::{FontMetrics, LayoutSurface};
pub use overlay::OverlayManager;
pub use pagination::{compute_page_count, PageCountPolicy, PagePlan};
pub use reflow::{PaginationState, PaginatorConfig, ReflowCoordinator, ReflowPhase, ReflowReport};
pub use render::PageFrame;
pub use surface::{ContentSampler, RenderSurface, SurfaceStyle};

use serde::Serialize;

/// Axis-aligned rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Coordinator over the in-memory document and headless layout
pub type HeadlessPaginator = ReflowCoordinator<Document, LayoutSurface>;

/// Mount a coordinator on `document` laid out by a [`LayoutSurface`]
pub fn headless(document: Document, config: PaginatorConfig) -> Result<HeadlessPaginator> {
    let geometry = GeometryRegistry::builtin().select(&config.default_geometry)?;
    let surface = LayoutSurface::new(&geometry);
    ReflowCoordinator::new(document, surface, config)
}
