//! Page geometry: sizes, margins, and the catalog of named page formats

mod page;
mod registry;

pub use page::{GeometrySpec, PageGeometry};
pub use registry::{GeometryRegistry, DEFAULT_GEOMETRY};
