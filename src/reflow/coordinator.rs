//! Reflow coordinator: the single owner of pagination state

use crate::document::{DocumentModel, PageBreakMarker};
use crate::error::Result;
use crate::geometry::{GeometryRegistry, PageGeometry};
use crate::overlay::{OverlayManager, RegionKind};
use crate::pagination::{self, PagePlan};
use crate::reflow::{PaginationState, PaginatorConfig, PendingReflow, ReflowPhase, ReflowReport, ReflowSignal};
use crate::render::{build_frames, PageFrame};
use crate::surface::{ContentSampler, RenderSurface, SurfaceStyle};

/// Measurement passes one flush may run: the in-flight pass plus one
/// follow-up for everything that arrived while it ran
pub const MAX_PASSES_PER_FLUSH: usize = 2;

/// Drives measure → recompute → apply in response to content, geometry,
/// and header/footer events
///
/// Events from the document arrive through a [`ReflowSignal`] and are only
/// recorded; [`flush`](Self::flush) runs at most one reflow at a time and
/// folds everything posted during a pass into a single follow-up pass.
pub struct ReflowCoordinator<D: DocumentModel, S: RenderSurface> {
    document: D,
    surface: S,
    registry: GeometryRegistry,
    config: PaginatorConfig,
    sampler: ContentSampler,
    signal: ReflowSignal,
    geometry: PageGeometry,
    overlays: OverlayManager,
    page_count: usize,
    phase: ReflowPhase,
    last_extent: Option<f32>,
    last_plan: Option<PagePlan>,
    measurement_passes: u64,
}

impl<D: DocumentModel, S: RenderSurface> ReflowCoordinator<D, S> {
    /// Mount on a document and surface with the built-in geometry catalog
    pub fn new(document: D, surface: S, config: PaginatorConfig) -> Result<Self> {
        Self::with_registry(document, surface, GeometryRegistry::builtin(), config)
    }

    pub fn with_registry(
        mut document: D,
        mut surface: S,
        registry: GeometryRegistry,
        config: PaginatorConfig,
    ) -> Result<Self> {
        let geometry = registry.select(&config.default_geometry)?;
        // Both regions enabled must still leave room on the default page
        pagination::page_capacity(&geometry, config.header_reserve, config.footer_reserve)?;

        let signal = ReflowSignal::new();
        let source = signal.clone();
        document.on_content_changed(Box::new(move |_version| source.content_changed()));

        surface.set_style(SurfaceStyle::for_geometry(&geometry));
        log::debug!("mounted pagination on {}", geometry.name());

        Ok(Self {
            document,
            surface,
            registry,
            overlays: OverlayManager::new(config.header_reserve, config.footer_reserve),
            config,
            sampler: ContentSampler::new(),
            signal,
            geometry,
            page_count: 1,
            phase: ReflowPhase::Idle,
            last_extent: None,
            last_plan: None,
            measurement_passes: 0,
        })
    }

    /// Content was committed to the document
    pub fn on_content_changed(&mut self) -> Result<ReflowReport> {
        self.signal.content_changed();
        self.flush()
    }

    /// Content was deleted; allows the page count to drop under any policy
    pub fn on_content_shrunk(&mut self) -> Result<ReflowReport> {
        self.signal.content_shrunk();
        self.flush()
    }

    /// Switch page geometry
    ///
    /// The new width, height, and margin reach the surface in one style
    /// update before this returns. A geometry that leaves no capacity with
    /// the current header/footer is rejected and nothing changes.
    pub fn on_geometry_changed(&mut self, geometry: PageGeometry) -> Result<ReflowReport> {
        pagination::page_capacity(
            &geometry,
            self.overlays.header_reserve(),
            self.overlays.footer_reserve(),
        )?;

        self.surface.set_style(SurfaceStyle::for_geometry(&geometry));
        log::debug!("geometry {} -> {}", self.geometry.name(), geometry.name());
        self.geometry = geometry;

        self.signal.layout_changed();
        self.flush()
    }

    /// Switch to a geometry from the registry by name
    pub fn select_geometry(&mut self, name: &str) -> Result<ReflowReport> {
        let geometry = self.registry.select(name)?;
        self.on_geometry_changed(geometry)
    }

    pub fn set_header_enabled(&mut self, enabled: bool) -> Result<ReflowReport> {
        self.set_region_enabled(RegionKind::Header, enabled)
    }

    pub fn set_footer_enabled(&mut self, enabled: bool) -> Result<ReflowReport> {
        self.set_region_enabled(RegionKind::Footer, enabled)
    }

    fn set_region_enabled(&mut self, kind: RegionKind, enabled: bool) -> Result<ReflowReport> {
        let (header, footer) = self.overlays.reserves_with(kind, enabled);
        pagination::page_capacity(&self.geometry, header, footer)?;

        if self.overlays.set_enabled(kind, enabled) {
            log::debug!("{kind:?} {}", if enabled { "enabled" } else { "disabled" });
            self.signal.layout_changed();
        }
        self.flush()
    }

    pub fn set_header_text(&mut self, text: impl Into<String>) {
        self.overlays.set_text(RegionKind::Header, text);
    }

    pub fn set_footer_text(&mut self, text: impl Into<String>) {
        self.overlays.set_text(RegionKind::Footer, text);
    }

    /// Insert a page-break marker at the document's caret
    ///
    /// The page count is left alone; the insertion's own content-changed
    /// event drives the next reflow. A rejected insertion is logged and
    /// returned, with pagination state untouched.
    pub fn request_manual_page_break(&mut self) -> Result<usize> {
        let caret = self.document.caret();
        PageBreakMarker::insert_at(&mut self.document, caret).map_err(|err| {
            log::warn!("manual page break at {caret:?} rejected: {err}");
            err
        })
    }

    /// Run pending reflows
    ///
    /// Runs the pending pass, then at most one follow-up covering every
    /// event posted meanwhile. Anything still pending after that waits for
    /// the next flush.
    pub fn flush(&mut self) -> Result<ReflowReport> {
        let mut report = ReflowReport {
            previous_page_count: self.page_count,
            page_count: self.page_count,
            ..ReflowReport::default()
        };

        while let Some(pending) = self.signal.take() {
            if report.passes == MAX_PASSES_PER_FLUSH {
                self.signal.restore(pending);
                log::warn!(
                    "reflow still pending after {} passes, deferring to next flush",
                    report.passes
                );
                break;
            }

            let plan = self.run_pass(pending)?;
            report.passes += 1;
            report.events = report.events.saturating_add(pending.events);
            report.plan = Some(plan);
        }

        report.page_count = self.page_count;
        Ok(report)
    }

    fn run_pass(&mut self, pending: PendingReflow) -> Result<PagePlan> {
        self.transition(ReflowPhase::Measuring);
        let extent = self.sampler.measure(&self.document, &mut self.surface);
        self.measurement_passes += 1;

        self.transition(ReflowPhase::Recomputing);
        let plan = pagination::plan(
            extent,
            &self.geometry,
            self.overlays.header_reserve(),
            self.overlays.footer_reserve(),
            self.document.marker_count(),
        );
        let mut plan = match plan {
            Ok(plan) => plan,
            Err(err) => {
                self.transition(ReflowPhase::Idle);
                return Err(err);
            }
        };
        if plan.page_count > self.config.max_pages {
            log::warn!(
                "extent {extent} needs {} pages, capping at {}",
                plan.page_count,
                self.config.max_pages
            );
            plan = plan.clamped(self.config.max_pages);
        }

        self.transition(ReflowPhase::Applying);
        let page_count =
            self.config
                .page_count_policy
                .resolve(self.page_count, plan.page_count, pending.exact);
        if !plan.is_consistent() {
            log::debug!(
                "{} markers for {} measured pages ({} missing, {} surplus)",
                plan.existing_markers,
                plan.page_count,
                plan.missing_breaks,
                plan.surplus_markers
            );
        }
        if page_count != self.page_count {
            log::debug!(
                "page count {} -> {page_count} (extent {extent}, capacity {})",
                self.page_count,
                plan.capacity
            );
        }
        self.page_count = page_count;
        self.last_extent = Some(extent);
        self.last_plan = Some(plan);

        self.transition(ReflowPhase::Idle);
        Ok(plan)
    }

    fn transition(&mut self, next: ReflowPhase) {
        log::trace!("reflow {:?} -> {next:?}", self.phase);
        self.phase = next;
    }

    /// Snapshot of the current pagination state
    pub fn state(&self) -> PaginationState {
        PaginationState {
            geometry: self.geometry.clone(),
            page_count: self.page_count,
            header_enabled: self.overlays.header().enabled,
            footer_enabled: self.overlays.footer().enabled,
            header_text: self.overlays.header().text.clone(),
            footer_text: self.overlays.footer().text.clone(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn phase(&self) -> ReflowPhase {
        self.phase
    }

    pub fn registry(&self) -> &GeometryRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Extent measured by the last pass
    pub fn last_extent(&self) -> Option<f32> {
        self.last_extent
    }

    pub fn last_plan(&self) -> Option<&PagePlan> {
        self.last_plan.as_ref()
    }

    /// Total measurement passes since mount
    pub fn measurement_passes(&self) -> u64 {
        self.measurement_passes
    }

    /// Whether events are waiting for a flush
    pub fn has_pending(&self) -> bool {
        self.signal.is_pending()
    }

    /// Handle for additional event sources
    pub fn signal(&self) -> ReflowSignal {
        self.signal.clone()
    }

    /// Page rectangles for the current state
    pub fn page_frames(&self) -> Vec<PageFrame> {
        build_frames(
            &self.geometry,
            self.page_count,
            self.overlays.header_reserve(),
            self.overlays.footer_reserve(),
            self.config.page_gap,
        )
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access for editing. Commits reach the coordinator through the
    /// document's change listener and are reflowed on the next flush.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
