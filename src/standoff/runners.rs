//! Standoff runner functions
//!
//! Entry points that validate a snapshot and run the engine:
//! - Single pair evaluation
//! - Site-wide evaluation of every pair
//! - Site-wide violation search with R-tree pair filtering

use anyhow::Result;
use log::{debug, info};
use rayon::prelude::*;
use rstar::RTree;

use crate::geometry::{Building, IndexedBuilding, Point};

use super::checks::{validate_polygon, validate_rules, validate_site, validate_weight};
use super::polygon::{centroid, find_closest_points, polygon_distance};
use super::safety::{assess, required_distance};
use super::types::{Evaluation, PairReport, StandoffRules};

/// Evaluate one pair of footprints against the standoff for `weight`
pub fn evaluate_pair(
    a: &[Point],
    b: &[Point],
    weight: f64,
    rules: &StandoffRules,
) -> Result<Evaluation> {
    validate_polygon("A", a)?;
    validate_polygon("B", b)?;
    validate_weight(weight)?;
    validate_rules(rules)?;
    Ok(evaluate_unchecked(a, b, weight, rules))
}

/// Evaluate two named buildings
pub fn evaluate_buildings(
    a: &Building,
    b: &Building,
    weight: f64,
    rules: &StandoffRules,
) -> Result<PairReport> {
    validate_polygon(&a.name, &a.coordinates)?;
    validate_polygon(&b.name, &b.coordinates)?;
    validate_weight(weight)?;
    validate_rules(rules)?;
    Ok(report(a, b, weight, rules))
}

fn evaluate_unchecked(a: &[Point], b: &[Point], weight: f64, rules: &StandoffRules) -> Evaluation {
    Evaluation {
        result: assess(polygon_distance(a, b), weight, rules),
        closest_points: find_closest_points(a, b),
        centroid_a: centroid(a),
        centroid_b: centroid(b),
    }
}

fn report(a: &Building, b: &Building, weight: f64, rules: &StandoffRules) -> PairReport {
    PairReport {
        building_a: a.name.clone(),
        building_b: b.name.clone(),
        evaluation: evaluate_unchecked(&a.coordinates, &b.coordinates, weight, rules),
    }
}

/// Evaluate every unordered building pair (i < j) in parallel.
/// Reports come back in (i, j) lexicographic order.
pub fn evaluate_site(
    buildings: &[Building],
    weight: f64,
    rules: &StandoffRules,
) -> Result<Vec<PairReport>> {
    let start = std::time::Instant::now();
    validate_site(buildings, weight, rules)?;

    let pairs: Vec<(usize, usize)> = (0..buildings.len())
        .flat_map(|i| ((i + 1)..buildings.len()).map(move |j| (i, j)))
        .collect();

    let reports: Vec<PairReport> = pairs
        .par_iter()
        .map(|&(i, j)| report(&buildings[i], &buildings[j], weight, rules))
        .collect();

    info!(
        "[Standoff] Site check: {} pairs evaluated, {} unsafe in {:?}",
        reports.len(),
        reports.iter().filter(|r| !r.evaluation.result.is_safe).count(),
        start.elapsed()
    );

    Ok(reports)
}

/// Find every unsafe building pair in a site.
///
/// Bounding boxes are indexed in an R-tree and each building's box is grown
/// by the required distance; only intersecting candidates are evaluated
/// exactly. Box separation never exceeds polygon separation, so pruned pairs
/// are always safe.
pub fn find_site_violations(
    buildings: &[Building],
    weight: f64,
    rules: &StandoffRules,
) -> Result<Vec<PairReport>> {
    let start = std::time::Instant::now();
    validate_site(buildings, weight, rules)?;

    let required = required_distance(weight, rules);
    let indexed: Vec<IndexedBuilding> = buildings
        .iter()
        .enumerate()
        .map(|(i, b)| IndexedBuilding::new(i, b))
        .collect();
    let tree = RTree::bulk_load(indexed.clone());

    let mut candidates: Vec<(usize, usize)> = Vec::new();
    for a in &indexed {
        let search_bounds = a.expanded(required);
        for b in tree.locate_in_envelope_intersecting(&search_bounds) {
            // Only check each pair once
            if a.index < b.index {
                candidates.push((a.index, b.index));
            }
        }
    }
    candidates.sort_unstable();

    debug!(
        "[Standoff] {} candidate pairs of {} buildings within {:.3} of each other",
        candidates.len(),
        buildings.len(),
        required
    );

    let violations: Vec<PairReport> = candidates
        .par_iter()
        .map(|&(i, j)| report(&buildings[i], &buildings[j], weight, rules))
        .filter(|r| !r.evaluation.result.is_safe)
        .collect();

    info!(
        "[Standoff] Violation search: {} candidates, {} violations found in {:?}",
        candidates.len(),
        violations.len(),
        start.elapsed()
    );

    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str, x: f64, y: f64) -> Building {
        Building::new(
            name,
            vec![
                Point::new(x, y),
                Point::new(x + 1.0, y),
                Point::new(x + 1.0, y + 1.0),
                Point::new(x, y + 1.0),
            ],
        )
    }

    #[test]
    fn test_evaluate_pair_rejects_bad_snapshot() {
        let a = square("A", 0.0, 0.0).coordinates;
        assert!(evaluate_pair(&a, &a[..2], 64.0, &StandoffRules::default()).is_err());
        assert!(evaluate_pair(&a, &a, 0.0, &StandoffRules::default()).is_err());
        assert!(evaluate_pair(&a, &a, 64.0, &StandoffRules { k_factor: 0.0 }).is_err());
    }

    #[test]
    fn test_site_runners_reject_negative_k_factor() {
        let site = vec![square("A", 0.0, 0.0), square("B", 3.0, 0.0)];
        let rules = StandoffRules { k_factor: -4.0 };
        assert!(evaluate_site(&site, 64.0, &rules).is_err());
        assert!(find_site_violations(&site, 64.0, &rules).is_err());
        assert!(evaluate_buildings(&site[0], &site[1], 64.0, &rules).is_err());
    }

    #[test]
    fn test_site_pairs_in_order() {
        let site = vec![square("A", 0.0, 0.0), square("B", 10.0, 0.0), square("C", 50.0, 0.0)];
        let reports = evaluate_site(&site, 64.0, &StandoffRules::default()).unwrap();
        let names: Vec<(&str, &str)> = reports
            .iter()
            .map(|r| (r.building_a.as_str(), r.building_b.as_str()))
            .collect();
        assert_eq!(names, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    }

    #[test]
    fn test_violations_match_full_site_check() {
        let site = vec![
            square("A", 0.0, 0.0),
            square("B", 10.0, 0.0),
            square("C", 50.0, 0.0),
            square("D", 60.0, 12.0),
        ];
        let rules = StandoffRules::default();
        let all = evaluate_site(&site, 64.0, &rules).unwrap();
        let expected: Vec<PairReport> =
            all.into_iter().filter(|r| !r.evaluation.result.is_safe).collect();
        let found = find_site_violations(&site, 64.0, &rules).unwrap();
        assert_eq!(found, expected);
        assert_eq!(found.len(), 2);
    }
}
