//! Blast standoff engine
//!
//! Computes the minimum separation between building footprints and compares
//! it against the cube-root standoff law, in parallel across a site when
//! asked to.
//!
//! # Submodules
//! - `types` - Result snapshots, closest point pairs, rules
//! - `distance` - Point and segment distance primitives
//! - `polygon` - Polygon distance, closest points, centroid
//! - `safety` - Standoff distance model
//! - `checks` - Snapshot validation
//! - `runners` - Pair and site entry points

mod types;
mod distance;
mod polygon;
mod safety;
mod checks;
mod runners;

pub use types::{
    DistanceResult, ClosestPointPair, StandoffRules, Evaluation, PairReport,
};

pub use distance::{
    closest_point_on_segment,
    point_segment_distance,
    segment_distance,
};

pub use polygon::{polygon_distance, find_closest_points, centroid};

pub use safety::{required_distance, assess, formula_label};

pub use checks::{validate_polygon, validate_weight, validate_rules, validate_site};

pub use runners::{
    evaluate_pair,
    evaluate_buildings,
    evaluate_site,
    find_site_violations,
};
