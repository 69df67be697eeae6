//! Polygon-to-polygon distance, closest points and centroids
//!
//! All functions expect polygons with at least three vertices; validation
//! lives in `checks`. Complexity is O(n*m) in the vertex counts.

use crate::geometry::{edges, Point};

use super::distance::{closest_point_on_segment, point_segment_distance, segment_distance};
use super::types::ClosestPointPair;

/// Minimum separation between two polygons.
///
/// Vertex-to-edge checks run in both directions, followed by every
/// edge-to-edge pair. The edge pass subsumes the vertex pass; both are kept.
pub fn polygon_distance(a: &[Point], b: &[Point]) -> f64 {
    let mut min_dist = f64::INFINITY;

    for &vertex in a {
        for (e1, e2) in edges(b) {
            min_dist = min_dist.min(point_segment_distance(vertex, e1, e2));
        }
    }

    for &vertex in b {
        for (e1, e2) in edges(a) {
            min_dist = min_dist.min(point_segment_distance(vertex, e1, e2));
        }
    }

    for (a1, a2) in edges(a) {
        for (b1, b2) in edges(b) {
            min_dist = min_dist.min(segment_distance(a1, a2, b1, b2));
        }
    }

    min_dist
}

/// Closest point pair between two polygons from the vertex-to-edge search.
///
/// No edge-to-edge pass is made, so the pair's distance can exceed
/// `polygon_distance` when the minimum is between two edge interiors.
/// Ties keep the first pair found: A's vertices in order, then B's.
pub fn find_closest_points(a: &[Point], b: &[Point]) -> ClosestPointPair {
    let mut min_dist = f64::INFINITY;
    let mut pair = ClosestPointPair {
        point1: a.first().copied().unwrap_or_default(),
        point2: b.first().copied().unwrap_or_default(),
    };

    for &vertex in a {
        for (e1, e2) in edges(b) {
            let projected = closest_point_on_segment(vertex, e1, e2);
            let d = vertex.distance_to(&projected);
            if d < min_dist {
                min_dist = d;
                pair = ClosestPointPair { point1: vertex, point2: projected };
            }
        }
    }

    for &vertex in b {
        for (e1, e2) in edges(a) {
            let projected = closest_point_on_segment(vertex, e1, e2);
            let d = vertex.distance_to(&projected);
            if d < min_dist {
                min_dist = d;
                pair = ClosestPointPair { point1: projected, point2: vertex };
            }
        }
    }

    pair
}

/// Vertex-average centroid, used as a label anchor.
///
/// Not area-weighted; irregular vertex spacing pulls it toward dense runs.
pub fn centroid(polygon: &[Point]) -> Point {
    let n = polygon.len() as f64;
    let (sx, sy) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}
