//! Coordinator configuration

use crate::geometry::DEFAULT_GEOMETRY;
use crate::overlay::DEFAULT_RESERVE;
use crate::pagination::PageCountPolicy;
use serde::{Deserialize, Serialize};

/// Gap between stacked pages on screen
pub const DEFAULT_PAGE_GAP: f32 = 32.0;

/// Upper bound on the page count a single measurement can produce
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Settings for a [`ReflowCoordinator`](crate::reflow::ReflowCoordinator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginatorConfig {
    /// Geometry selected at mount
    pub default_geometry: String,
    pub header_reserve: f32,
    pub footer_reserve: f32,
    pub page_count_policy: PageCountPolicy,
    pub page_gap: f32,
    /// Measurements needing more pages than this are capped
    pub max_pages: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            default_geometry: DEFAULT_GEOMETRY.to_string(),
            header_reserve: DEFAULT_RESERVE,
            footer_reserve: DEFAULT_RESERVE,
            page_count_policy: PageCountPolicy::GrowOnly,
            page_gap: DEFAULT_PAGE_GAP,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl PaginatorConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
