//! Blast standoff analysis for building footprints
//!
//! Computes the minimum separation between two simple polygons, finds the
//! closest point pair and vertex centroids, and compares the separation with
//! the standoff required for an explosive weight (D = K * W^(1/3)).
//!
//! ```
//! use standoff::geometry::Point;
//! use standoff::standoff::{evaluate_pair, StandoffRules};
//!
//! let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 1.0)];
//! let b = [Point::new(20.0, 0.0), Point::new(21.0, 0.0), Point::new(21.0, 1.0), Point::new(20.0, 1.0)];
//! let eval = evaluate_pair(&a, &b, 64.0, &StandoffRules::default()).unwrap();
//! assert!(eval.result.is_safe);
//! ```

pub mod cli;
pub mod consts;
pub mod geometry;
pub mod scene;
pub mod server;
pub mod standoff;

pub use crate::geometry::{Building, Point};
pub use crate::scene::{load_scene, read_scene, Scene};
pub use crate::standoff::{DistanceResult, ClosestPointPair, Evaluation, PairReport, StandoffRules};
