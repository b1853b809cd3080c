//! Header and footer overlays
//!
//! Each region, when enabled, reserves a fixed band of every page that body
//! content cannot flow into.

use serde::{Deserialize, Serialize};

/// Default height reserved by an enabled header or footer
pub const DEFAULT_RESERVE: f32 = 60.0;

/// Which overlay region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Header,
    Footer,
}

/// State of one overlay region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRegion {
    pub enabled: bool,
    pub text: String,
    /// Height taken from each page while enabled
    pub reserve: f32,
}

impl OverlayRegion {
    pub fn new(reserve: f32) -> Self {
        Self {
            enabled: false,
            text: String::new(),
            reserve,
        }
    }

    /// Height currently taken from each page
    pub fn effective_reserve(&self) -> f32 {
        if self.enabled {
            self.reserve
        } else {
            0.0
        }
    }
}

/// Tracks header/footer state and the capacity they take away
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayManager {
    header: OverlayRegion,
    footer: OverlayRegion,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVE, DEFAULT_RESERVE)
    }
}

impl OverlayManager {
    pub fn new(header_reserve: f32, footer_reserve: f32) -> Self {
        Self {
            header: OverlayRegion::new(header_reserve),
            footer: OverlayRegion::new(footer_reserve),
        }
    }

    pub fn region(&self, kind: RegionKind) -> &OverlayRegion {
        match kind {
            RegionKind::Header => &self.header,
            RegionKind::Footer => &self.footer,
        }
    }

    fn region_mut(&mut self, kind: RegionKind) -> &mut OverlayRegion {
        match kind {
            RegionKind::Header => &mut self.header,
            RegionKind::Footer => &mut self.footer,
        }
    }

    pub fn header(&self) -> &OverlayRegion {
        &self.header
    }

    pub fn footer(&self) -> &OverlayRegion {
        &self.footer
    }

    /// Toggle a region. Returns whether anything changed.
    pub fn set_enabled(&mut self, kind: RegionKind, enabled: bool) -> bool {
        let region = self.region_mut(kind);
        let changed = region.enabled != enabled;
        region.enabled = enabled;
        changed
    }

    pub fn set_text(&mut self, kind: RegionKind, text: impl Into<String>) {
        self.region_mut(kind).text = text.into();
    }

    pub fn header_reserve(&self) -> f32 {
        self.header.effective_reserve()
    }

    pub fn footer_reserve(&self) -> f32 {
        self.footer.effective_reserve()
    }

    /// Reservations that would apply if `kind` were set to `enabled`
    pub fn reserves_with(&self, kind: RegionKind, enabled: bool) -> (f32, f32) {
        let mut preview = self.clone();
        preview.set_enabled(kind, enabled);
        (preview.header_reserve(), preview.footer_reserve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reserves_nothing() {
        let overlays = OverlayManager::default();
        assert_eq!(overlays.header_reserve(), 0.0);
        assert_eq!(overlays.footer_reserve(), 0.0);
    }

    #[test]
    fn test_toggle() {
        let mut overlays = OverlayManager::default();
        assert!(overlays.set_enabled(RegionKind::Header, true));
        assert!(!overlays.set_enabled(RegionKind::Header, true));
        assert_eq!(overlays.header_reserve(), 60.0);
        assert_eq!(overlays.footer_reserve(), 0.0);

        overlays.set_enabled(RegionKind::Footer, true);
        assert_eq!(overlays.footer_reserve(), 60.0);
    }

    #[test]
    fn test_text_survives_toggle() {
        let mut overlays = OverlayManager::new(40.0, 30.0);
        overlays.set_text(RegionKind::Footer, "Confidential");
        overlays.set_enabled(RegionKind::Footer, true);
        overlays.set_enabled(RegionKind::Footer, false);
        assert_eq!(overlays.footer().text, "Confidential");
        assert_eq!(overlays.footer_reserve(), 0.0);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let overlays = OverlayManager::default();
        assert_eq!(overlays.reserves_with(RegionKind::Header, true), (60.0, 0.0));
        assert!(!overlays.header().enabled);
    }
}
