//! Pagination calculator
//!
//! Pure functions from a measured content extent and a page geometry to the
//! number of pages the content needs. Nothing here touches a surface or a
//! document, so every rule can be checked in isolation.

use crate::error::{PaginationError, Result};
use crate::geometry::PageGeometry;
use serde::{Deserialize, Serialize};

/// How a content-driven reflow may change the visible page count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageCountPolicy {
    /// Content edits only ever add pages. A smaller measurement is ignored
    /// until an explicit shrink, geometry, or header/footer event.
    #[default]
    GrowOnly,
    /// Content edits set the page count to exactly what the content needs
    ShrinkToFit,
}

impl PageCountPolicy {
    /// Resolve the page count to publish. `exact` is set for events that are
    /// allowed to shrink the count regardless of policy.
    pub fn resolve(self, previous: usize, computed: usize, exact: bool) -> usize {
        match self {
            _ if exact => computed,
            PageCountPolicy::GrowOnly => previous.max(computed),
            PageCountPolicy::ShrinkToFit => computed,
        }
    }
}

/// Height available to body content on one page
///
/// Header and footer reservations are carved out of the full page height.
pub fn page_capacity(geometry: &PageGeometry, header_reserve: f32, footer_reserve: f32) -> Result<f32> {
    for (label, reserve) in [("header", header_reserve), ("footer", footer_reserve)] {
        if !(reserve.is_finite() && reserve >= 0.0) {
            return Err(PaginationError::invalid_geometry(
                geometry.name(),
                format!("{label} reserve must be a non-negative number, got {reserve}"),
            ));
        }
    }

    let capacity = geometry.height() - header_reserve - footer_reserve;
    if capacity <= 0.0 {
        return Err(PaginationError::invalid_geometry(
            geometry.name(),
            format!(
                "header {header_reserve} + footer {footer_reserve} leave no room in page height {}",
                geometry.height()
            ),
        ));
    }

    Ok(capacity)
}

/// Pages needed to hold `extent` at `capacity` per page; never less than one
pub fn pages_for_capacity(extent: f32, capacity: f32) -> usize {
    let ratio = (extent as f64 / capacity as f64).ceil();
    // Also catches NaN from a bad extent
    if !(ratio > 1.0) {
        return 1;
    }
    ratio.min(usize::MAX as f64) as usize
}

/// Number of pages for `extent` on `geometry` with the given reservations
pub fn compute_page_count(
    extent: f32,
    geometry: &PageGeometry,
    header_reserve: f32,
    footer_reserve: f32,
) -> Result<usize> {
    let capacity = page_capacity(geometry, header_reserve, footer_reserve)?;
    Ok(pages_for_capacity(extent, capacity))
}

/// Page count plus how it compares to the markers already in the content
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub page_count: usize,
    pub capacity: f32,
    /// Markers present in the document
    pub existing_markers: usize,
    /// Breaks the page count implies beyond the existing markers
    pub missing_breaks: usize,
    /// Markers beyond what the page count implies
    pub surplus_markers: usize,
}

impl PagePlan {
    fn new(page_count: usize, capacity: f32, existing_markers: usize) -> Self {
        let implied = page_count.saturating_sub(1);
        Self {
            page_count,
            capacity,
            existing_markers,
            missing_breaks: implied.saturating_sub(existing_markers),
            surplus_markers: existing_markers.saturating_sub(implied),
        }
    }

    /// Whether markers and measured pages agree
    pub fn is_consistent(&self) -> bool {
        self.missing_breaks == 0 && self.surplus_markers == 0
    }

    /// Cap the page count at `max_pages` (at least one)
    pub fn clamped(self, max_pages: usize) -> Self {
        Self::new(
            self.page_count.min(max_pages.max(1)),
            self.capacity,
            self.existing_markers,
        )
    }
}

/// Compute the page count and reconcile it with the existing marker count.
/// The page count always comes from the extent, never from the markers.
pub fn plan(
    extent: f32,
    geometry: &PageGeometry,
    header_reserve: f32,
    footer_reserve: f32,
    existing_markers: usize,
) -> Result<PagePlan> {
    let capacity = page_capacity(geometry, header_reserve, footer_reserve)?;
    Ok(PagePlan::new(
        pages_for_capacity(extent, capacity),
        capacity,
        existing_markers,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4() -> PageGeometry {
        PageGeometry::new("A4", 816.0, 1056.0, 96.0).unwrap()
    }

    fn legal() -> PageGeometry {
        PageGeometry::new("Legal", 816.0, 1344.0, 96.0).unwrap()
    }

    #[test]
    fn test_empty_document_is_one_page() {
        assert_eq!(compute_page_count(0.0, &a4(), 0.0, 0.0).unwrap(), 1);
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(compute_page_count(2200.0, &a4(), 0.0, 0.0).unwrap(), 3);
        assert_eq!(compute_page_count(1056.0, &a4(), 0.0, 0.0).unwrap(), 1);
        assert_eq!(compute_page_count(1057.0, &a4(), 0.0, 0.0).unwrap(), 2);
        // Exact multiples do not add a page
        assert_eq!(compute_page_count(2112.0, &a4(), 0.0, 0.0).unwrap(), 2);
    }

    #[test]
    fn test_header_footer_reserve() {
        assert_eq!(compute_page_count(2200.0, &a4(), 60.0, 60.0).unwrap(), 3);
        assert_eq!(compute_page_count(1900.0, &a4(), 0.0, 0.0).unwrap(), 2);
        assert_eq!(compute_page_count(1900.0, &a4(), 60.0, 60.0).unwrap(), 3);
        assert_eq!(page_capacity(&a4(), 60.0, 60.0).unwrap(), 936.0);
    }

    #[test]
    fn test_taller_page_needs_fewer_pages() {
        assert_eq!(compute_page_count(2200.0, &legal(), 0.0, 0.0).unwrap(), 2);
    }

    #[test]
    fn test_reserve_swallowing_page() {
        let err = compute_page_count(10.0, &a4(), 600.0, 456.0).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidGeometry { .. }));
        assert!(page_capacity(&a4(), -1.0, 0.0).is_err());
        assert!(page_capacity(&a4(), 0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_bad_extent_is_one_page() {
        assert_eq!(pages_for_capacity(f32::NAN, 100.0), 1);
        assert_eq!(pages_for_capacity(-50.0, 100.0), 1);
    }

    #[test]
    fn test_monotonic_in_extent() {
        let geometry = a4();
        let mut previous = 1;
        for step in 0..400 {
            let extent = step as f32 * 37.5;
            let count = compute_page_count(extent, &geometry, 60.0, 0.0).unwrap();
            assert!(count >= 1);
            assert!(count >= previous, "page count fell at extent {extent}");
            previous = count;
        }
    }

    #[test]
    fn test_non_increasing_in_height() {
        let extent = 5000.0;
        let mut previous = usize::MAX;
        for height in (200..3000).step_by(50) {
            let geometry = PageGeometry::new("Custom", 600.0, height as f32, 10.0).unwrap();
            let count = compute_page_count(extent, &geometry, 0.0, 0.0).unwrap();
            assert!(count <= previous, "page count rose at height {height}");
            previous = count;
        }
    }

    #[test]
    fn test_non_decreasing_in_reserve() {
        let geometry = a4();
        let mut previous = 0;
        for reserve in (0..500).step_by(25) {
            let count = compute_page_count(3000.0, &geometry, reserve as f32, reserve as f32).unwrap();
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_plan_reconciles_markers() {
        let plan = plan(2200.0, &a4(), 0.0, 0.0, 0).unwrap();
        assert_eq!(plan.page_count, 3);
        assert_eq!(plan.missing_breaks, 2);
        assert!(!plan.is_consistent());

        let plan = super::plan(100.0, &a4(), 0.0, 0.0, 3).unwrap();
        assert_eq!(plan.page_count, 1);
        assert_eq!(plan.surplus_markers, 3);

        let plan = super::plan(2000.0, &a4(), 0.0, 0.0, 1).unwrap();
        assert!(plan.is_consistent());
    }

    #[test]
    fn test_clamped_plan() {
        let plan = plan(1.0e12, &a4(), 0.0, 0.0, 2).unwrap();
        assert!(plan.page_count > 1_000_000);

        let capped = plan.clamped(500);
        assert_eq!(capped.page_count, 500);
        assert_eq!(capped.missing_breaks, 497);
        assert_eq!(capped.capacity, 1056.0);
        assert_eq!(plan.clamped(0).page_count, 1);
        assert_eq!(capped.clamped(900), capped);
    }

    #[test]
    fn test_policy() {
        assert_eq!(PageCountPolicy::GrowOnly.resolve(3, 2, false), 3);
        assert_eq!(PageCountPolicy::GrowOnly.resolve(3, 4, false), 4);
        assert_eq!(PageCountPolicy::GrowOnly.resolve(3, 2, true), 2);
        assert_eq!(PageCountPolicy::ShrinkToFit.resolve(3, 2, false), 2);
    }
}
