//! Catalog of named page geometries

use crate::error::{PaginationError, Result};
use crate::geometry::PageGeometry;
use rustc_hash::FxHashMap;

/// Name of the geometry selected when nothing else is configured
pub const DEFAULT_GEOMETRY: &str = "A4";

/// Built-in page sizes: (name, width, height, margin) in CSS pixels
const BUILTIN: [(&str, f32, f32, f32); 6] = [
    ("A4", 816.0, 1056.0, 96.0),
    ("A3", 1123.0, 1587.0, 118.0),
    ("A5", 595.0, 842.0, 71.0),
    ("Letter", 816.0, 1056.0, 96.0),
    ("Legal", 816.0, 1344.0, 96.0),
    ("Tabloid", 1056.0, 1632.0, 96.0),
];

/// Read-only, insertion-ordered catalog of page geometries
#[derive(Debug, Clone)]
pub struct GeometryRegistry {
    geometries: Vec<PageGeometry>,
    by_name: FxHashMap<String, usize>,
}

impl Default for GeometryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GeometryRegistry {
    /// Build a registry from a custom list. The list must be non-empty and
    /// names must be unique.
    pub fn new(geometries: Vec<PageGeometry>) -> Result<Self> {
        if geometries.is_empty() {
            return Err(PaginationError::invalid_geometry(
                "<registry>",
                "at least one page geometry is required",
            ));
        }

        let mut by_name = FxHashMap::default();
        for (idx, geometry) in geometries.iter().enumerate() {
            if by_name.insert(geometry.name().to_string(), idx).is_some() {
                return Err(PaginationError::invalid_geometry(
                    geometry.name(),
                    "duplicate geometry name",
                ));
            }
        }

        Ok(Self {
            geometries,
            by_name,
        })
    }

    /// The standard paper sizes offered by the editor
    pub fn builtin() -> Self {
        let geometries = BUILTIN
            .iter()
            .map(|&(name, width, height, margin)| PageGeometry {
                name: name.to_string(),
                width,
                height,
                margin,
            })
            .collect::<Vec<_>>();
        let by_name = geometries
            .iter()
            .enumerate()
            .map(|(idx, g)| (g.name().to_string(), idx))
            .collect();

        Self {
            geometries,
            by_name,
        }
    }

    /// All geometries in catalog order
    pub fn list(&self) -> &[PageGeometry] {
        &self.geometries
    }

    /// Look up a geometry by name, returning an owned copy
    pub fn select(&self, name: &str) -> Result<PageGeometry> {
        self.get(name)
            .cloned()
            .ok_or_else(|| PaginationError::not_found(name))
    }

    pub fn get(&self, name: &str) -> Option<&PageGeometry> {
        self.by_name.get(name).map(|&idx| &self.geometries[idx])
    }

    /// First entry of the catalog
    pub fn first(&self) -> &PageGeometry {
        &self.geometries[0]
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let registry = GeometryRegistry::builtin();
        let names: Vec<_> = registry.list().iter().map(|g| g.name()).collect();
        assert_eq!(names, ["A4", "A3", "A5", "Letter", "Legal", "Tabloid"]);
        assert_eq!(registry.first().name(), DEFAULT_GEOMETRY);
    }

    #[test]
    fn test_builtin_geometries_are_valid() {
        for g in GeometryRegistry::builtin().list() {
            assert!(PageGeometry::new(g.name(), g.width(), g.height(), g.margin()).is_ok());
        }
    }

    #[test]
    fn test_select() {
        let registry = GeometryRegistry::builtin();
        let legal = registry.select("Legal").unwrap();
        assert_eq!(legal.height(), 1344.0);
        assert_eq!(legal.width(), 816.0);
        assert_eq!(legal.margin(), 96.0);
    }

    #[test]
    fn test_select_unknown() {
        let registry = GeometryRegistry::builtin();
        assert_eq!(
            registry.select("B5"),
            Err(PaginationError::not_found("B5"))
        );
        // Lookup is exact, not case-insensitive
        assert!(registry.select("legal").is_err());
    }

    #[test]
    fn test_custom_registry() {
        let b5 = PageGeometry::new("B5", 665.0, 945.0, 72.0).unwrap();
        let registry = GeometryRegistry::new(vec![b5.clone()]).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.select("B5").unwrap(), b5);

        assert!(GeometryRegistry::new(Vec::new()).is_err());
        assert!(GeometryRegistry::new(vec![b5.clone(), b5]).is_err());
    }
}
