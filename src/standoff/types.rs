//! Standoff data types
//!
//! Result snapshots, closest point pairs and the configurable rules.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_K_FACTOR;
use crate::geometry::Point;

/// Outcome of comparing an actual separation against the required standoff
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistanceResult {
    pub actual_distance: f64,
    pub required_distance: f64,
    /// actual / required; 1.0 or more means compliant
    pub safety_factor: f64,
    /// Inclusive: equal distances are safe
    pub is_safe: bool,
}

impl DistanceResult {
    pub fn new(actual_distance: f64, required_distance: f64) -> Self {
        Self {
            actual_distance,
            required_distance,
            safety_factor: actual_distance / required_distance,
            is_safe: actual_distance >= required_distance,
        }
    }

    /// Verdict label shown to users
    pub fn verdict(&self) -> &'static str {
        if self.is_safe {
            "SAFE"
        } else {
            "UNSAFE"
        }
    }
}

/// One point on each polygon; either may lie inside an edge
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosestPointPair {
    pub point1: Point,
    pub point2: Point,
}

/// Scaling rules for the standoff model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandoffRules {
    pub k_factor: f64,
}

impl Default for StandoffRules {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
        }
    }
}

/// Full report for one building pair
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub result: DistanceResult,
    pub closest_points: ClosestPointPair,
    pub centroid_a: Point,
    pub centroid_b: Point,
}

/// Evaluation of a named pair within a site
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairReport {
    pub building_a: String,
    pub building_b: String,
    pub evaluation: Evaluation,
}
