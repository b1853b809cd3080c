//! Page geometry value type

use crate::error::{PaginationError, Result};
use serde::{Deserialize, Serialize};

/// Size and margin of a page in CSS pixels (96 DPI)
///
/// Geometries are immutable once built. Components share them by cloning,
/// never through a mutable reference to a common instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometrySpec", into = "GeometrySpec")]
pub struct PageGeometry {
    pub(super) name: String,
    pub(super) width: f32,
    pub(super) height: f32,
    pub(super) margin: f32,
}

/// Unvalidated wire form of a geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometrySpec {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// Build a geometry, rejecting any that leave no content area
    pub fn new(name: impl Into<String>, width: f32, height: f32, margin: f32) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(PaginationError::invalid_geometry(name, "name must not be empty"));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(PaginationError::invalid_geometry(
                name,
                format!("width must be positive, got {width}"),
            ));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(PaginationError::invalid_geometry(
                name,
                format!("height must be positive, got {height}"),
            ));
        }
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(PaginationError::invalid_geometry(
                name,
                format!("margin must not be negative, got {margin}"),
            ));
        }
        if margin >= width || margin >= height {
            return Err(PaginationError::invalid_geometry(
                name,
                format!("margin {margin} leaves no content area in {width}x{height}"),
            ));
        }

        Ok(Self {
            name,
            width,
            height,
            margin,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Usable width between left and right margins
    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    /// Usable height between top and bottom margins
    pub fn content_height(&self) -> f32 {
        (self.height - 2.0 * self.margin).max(0.0)
    }

    /// The same page turned on its side
    pub fn landscape(&self) -> Self {
        Self {
            name: format!("{} (Landscape)", self.name),
            width: self.height,
            height: self.width,
            margin: self.margin,
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl TryFrom<GeometrySpec> for PageGeometry {
    type Error = PaginationError;

    fn try_from(raw: GeometrySpec) -> Result<Self> {
        Self::new(raw.name, raw.width, raw.height, raw.margin)
    }
}

impl From<PageGeometry> for GeometrySpec {
    fn from(geometry: PageGeometry) -> Self {
        Self {
            name: geometry.name,
            width: geometry.width,
            height: geometry.height,
            margin: geometry.margin,
        }
    }
}
