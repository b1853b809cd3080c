//! Pagination state and reflow phases

use crate::geometry::PageGeometry;
use crate::pagination::PagePlan;
use serde::Serialize;

/// Where the coordinator is in a reflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflowPhase {
    /// No reflow in flight
    #[default]
    Idle,
    /// Sampler is reading the settled content height
    Measuring,
    /// Calculator is deriving the page count
    Recomputing,
    /// Results are being written to state
    Applying,
}

/// Read-only snapshot of the coordinator's pagination state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub geometry: PageGeometry,
    pub page_count: usize,
    pub header_enabled: bool,
    pub footer_enabled: bool,
    pub header_text: String,
    pub footer_text: String,
}

/// Outcome of draining pending reflow triggers
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflowReport {
    /// Measurement passes run
    pub passes: usize,
    /// Events folded into those passes
    pub events: u32,
    pub previous_page_count: usize,
    pub page_count: usize,
    /// Plan of the last pass, if any ran
    pub plan: Option<PagePlan>,
}

impl ReflowReport {
    pub fn page_count_changed(&self) -> bool {
        self.passes > 0 && self.page_count != self.previous_page_count
    }
}
