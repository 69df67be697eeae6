//! Geometry module for building footprints
//!
//! # Submodules
//! - `types` - Core primitives (Point, Building, edge iteration)
//! - `spatial` - R-tree wrappers for site-wide pair filtering

mod types;
mod spatial;

pub use types::{Point, Building, edges};
pub use spatial::IndexedBuilding;
