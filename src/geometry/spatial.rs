//! Spatial indexing types for site-wide checks
//!
//! Building bounding boxes go into an R-tree so only pairs that could
//! possibly violate the standoff distance are evaluated exactly.

use rstar::{RTreeObject, AABB};

use super::types::Building;

/// Building wrapper for R-tree spatial indexing
#[derive(Clone, Debug)]
pub struct IndexedBuilding {
    /// Position of the building in the caller's slice
    pub index: usize,
    pub bounds: AABB<[f64; 2]>,
}

impl IndexedBuilding {
    pub fn new(index: usize, building: &Building) -> Self {
        let b = building.bounds();
        Self {
            index,
            bounds: AABB::from_corners([b[0], b[1]], [b[2], b[3]]),
        }
    }

    /// Bounds grown by `margin` on every side
    pub fn expanded(&self, margin: f64) -> AABB<[f64; 2]> {
        let lo = self.bounds.lower();
        let hi = self.bounds.upper();
        AABB::from_corners([lo[0] - margin, lo[1] - margin], [hi[0] + margin, hi[1] + margin])
    }
}

impl RTreeObject for IndexedBuilding {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_expanded_bounds() {
        let b = Building::new(
            "Magazine",
            vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 1.0)],
        );
        let ib = IndexedBuilding::new(7, &b);
        let e = ib.expanded(0.5);
        assert_eq!(ib.index, 7);
        assert_eq!(e.lower(), [-0.5, -0.5]);
        assert_eq!(e.upper(), [2.5, 1.5]);
    }
}
