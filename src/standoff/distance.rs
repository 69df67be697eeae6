//! Point and segment distance primitives
//!
//! Projection-based point-to-segment distance and the four-endpoint
//! segment-to-segment approximation used by the polygon engine.

use crate::geometry::Point;

/// Project `p` onto segment `a`-`b`, clamped to the segment.
/// Returns `a` when the segment has zero length.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = [b.x - a.x, b.y - a.y];
    let ap = [p.x - a.x, p.y - a.y];
    let ab_len2 = ab[0] * ab[0] + ab[1] * ab[1];

    if ab_len2 == 0.0 {
        // Degenerate segment
        return a;
    }

    let t = ((ap[0] * ab[0] + ap[1] * ab[1]) / ab_len2).clamp(0.0, 1.0);
    Point::new(a.x + t * ab[0], a.y + t * ab[1])
}

/// Point-to-segment minimum distance
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    p.distance_to(&closest_point_on_segment(p, a, b))
}

/// Segment-to-segment minimum distance over the four endpoint projections.
///
/// Segments that cross at interior points are not detected: the result is
/// then the smallest endpoint distance, which is positive.
pub fn segment_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> f64 {
    [
        point_segment_distance(a1, b1, b2),
        point_segment_distance(a2, b1, b2),
        point_segment_distance(b1, a1, a2),
        point_segment_distance(b2, a1, a2),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}
