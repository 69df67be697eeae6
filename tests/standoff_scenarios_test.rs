use standoff::geometry::Point;
use standoff::standoff::{
    evaluate_pair, find_closest_points, polygon_distance, required_distance, DistanceResult,
    StandoffRules,
};

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn unit_square(x: f64, y: f64) -> Vec<Point> {
        vec![
            Point::new(x, y),
            Point::new(x + 1.0, y),
            Point::new(x + 1.0, y + 1.0),
            Point::new(x, y + 1.0),
        ]
    }

    #[test]
    fn test_separated_squares_are_safe() {
        let eval = evaluate_pair(&unit_square(0.0, 0.0), &unit_square(20.0, 0.0), 64.0, &StandoffRules::default())
            .expect("valid snapshot");
        let r = eval.result;

        println!("actual={} required={} factor={}", r.actual_distance, r.required_distance, r.safety_factor);
        assert!((r.actual_distance - 19.0).abs() < EPS);
        assert!((r.required_distance - 16.0).abs() < EPS);
        assert!((r.safety_factor - 1.1875).abs() < EPS);
        assert!(r.is_safe);

        assert_eq!(eval.centroid_a, Point::new(0.5, 0.5));
        assert_eq!(eval.centroid_b, Point::new(20.5, 0.5));
        assert!((eval.closest_points.point1.distance_to(&eval.closest_points.point2) - 19.0).abs() < EPS);
    }

    #[test]
    fn test_adjacent_squares_are_unsafe() {
        let eval = evaluate_pair(&unit_square(0.0, 0.0), &unit_square(16.0, 0.0), 64.0, &StandoffRules::default())
            .expect("valid snapshot");
        let r = eval.result;
        assert!((r.actual_distance - 15.0).abs() < EPS);
        assert!((r.safety_factor - 0.9375).abs() < EPS);
        assert!(!r.is_safe);
    }

    #[test]
    fn test_boundary_distance_is_safe() {
        // Gap of exactly 8 against W = 8 (required 8)
        let eval = evaluate_pair(&unit_square(0.0, 0.0), &unit_square(9.0, 0.0), 8.0, &StandoffRules::default())
            .expect("valid snapshot");
        assert!((eval.result.actual_distance - 8.0).abs() < EPS);
        assert!((eval.result.required_distance - 8.0).abs() < EPS);

        let exact = DistanceResult::new(8.0, 8.0);
        assert!(exact.is_safe);
    }

    #[test]
    fn test_rotated_footprint_distance_is_symmetric() {
        let a = vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 5.0),
            Point::new(25.0, 25.0),
            Point::new(-5.0, 20.0),
        ];
        let b = vec![
            Point::new(60.0, 40.0),
            Point::new(75.0, 30.0),
            Point::new(90.0, 55.0),
            Point::new(70.0, 70.0),
            Point::new(55.0, 60.0),
        ];
        let ab = polygon_distance(&a, &b);
        let ba = polygon_distance(&b, &a);
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_touching_footprints_have_zero_distance() {
        let a = unit_square(0.0, 0.0);
        assert_eq!(polygon_distance(&a, &unit_square(1.0, 0.0)), 0.0);
        assert_eq!(polygon_distance(&a, &unit_square(1.0, 1.0)), 0.0);
        // B's vertex lies on the middle of A's right edge
        let wedge = vec![Point::new(1.0, 0.5), Point::new(3.0, 0.0), Point::new(3.0, 1.0)];
        assert_eq!(polygon_distance(&a, &wedge), 0.0);
    }

    /// Edges that cross only at interior points are not detected as touching:
    /// the reported distance is the nearest vertex-to-edge distance.
    #[test]
    fn test_interior_crossing_reports_positive_distance() {
        // Thin horizontal bar crossing a thin vertical bar; no vertex of either
        // lies inside or on the other
        let horizontal = vec![
            Point::new(0.0, 4.9),
            Point::new(10.0, 4.9),
            Point::new(10.0, 5.1),
            Point::new(0.0, 5.1),
        ];
        let vertical = vec![
            Point::new(4.9, 0.0),
            Point::new(5.1, 0.0),
            Point::new(5.1, 10.0),
            Point::new(4.9, 10.0),
        ];
        let d = polygon_distance(&horizontal, &vertical);
        println!("crossing bars report distance {}", d);
        assert!(d > 0.0);
        assert!((d - 4.9).abs() < EPS);
    }

    /// The closest-point search skips the edge-to-edge pass. Callers must not
    /// assume its pair spans the polygon distance; with endpoint-based segment
    /// distances the two happen to agree, crossings included.
    #[test]
    fn test_closest_points_follow_vertex_to_edge_search() {
        let a = vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)];
        let b = vec![Point::new(0.0, 5.0), Point::new(4.0, 5.0), Point::new(2.0, 8.0)];
        let pair = find_closest_points(&a, &b);
        assert_eq!(pair.point1, Point::new(2.0, 3.0));
        assert_eq!(pair.point2, Point::new(2.0, 5.0));
        assert!((polygon_distance(&a, &b) - 2.0).abs() < EPS);

        // Crossing bars: both report 4.9 where the true separation is 0
        let horizontal = vec![
            Point::new(0.0, 4.9),
            Point::new(10.0, 4.9),
            Point::new(10.0, 5.1),
            Point::new(0.0, 5.1),
        ];
        let vertical = vec![
            Point::new(4.9, 0.0),
            Point::new(5.1, 0.0),
            Point::new(5.1, 10.0),
            Point::new(4.9, 10.0),
        ];
        let pair = find_closest_points(&horizontal, &vertical);
        let pair_dist = pair.point1.distance_to(&pair.point2);
        assert!(pair_dist + EPS >= polygon_distance(&horizontal, &vertical));
        assert!((pair_dist - 4.9).abs() < EPS);
    }

    #[test]
    fn test_required_distance_values() {
        let rules = StandoffRules::default();
        assert!((required_distance(8.0, &rules) - 8.0).abs() < EPS);
        assert!((required_distance(64.0, &rules) - 16.0).abs() < EPS);
        assert!(required_distance(100.0, &rules) < required_distance(100.5, &rules));
    }

    #[test]
    fn test_invalid_snapshots_are_rejected() {
        let a = unit_square(0.0, 0.0);
        let rules = StandoffRules::default();
        assert!(evaluate_pair(&a, &a[..2], 64.0, &rules).is_err());
        assert!(evaluate_pair(&a, &unit_square(5.0, 0.0), -1.0, &rules).is_err());
    }
}
