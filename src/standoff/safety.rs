//! Cube-root blast scaling: D = K * W^(1/3)

use super::types::{DistanceResult, StandoffRules};

/// Required standoff distance for an explosive weight.
/// Weight must be positive; callers validate first.
pub fn required_distance(weight: f64, rules: &StandoffRules) -> f64 {
    rules.k_factor * weight.cbrt()
}

/// Combine a measured separation with the weight's required distance
pub fn assess(actual_distance: f64, weight: f64, rules: &StandoffRules) -> DistanceResult {
    DistanceResult::new(actual_distance, required_distance(weight, rules))
}

/// Human-readable form of the scaling law for the given rules
pub fn formula_label(rules: &StandoffRules) -> String {
    format!("D = K × W^(1/3), K = {}", rules.k_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_perfect_cubes() {
        let rules = StandoffRules::default();
        assert!((required_distance(8.0, &rules) - 8.0).abs() < EPS);
        assert!((required_distance(64.0, &rules) - 16.0).abs() < EPS);
        assert!((required_distance(1.0, &rules) - 4.0).abs() < EPS);
    }

    #[test]
    fn test_strictly_increasing() {
        let rules = StandoffRules::default();
        let weights = [0.001, 0.5, 1.0, 7.9, 8.0, 8.1, 100.0, 1e6];
        for w in weights.windows(2) {
            assert!(required_distance(w[0], &rules) < required_distance(w[1], &rules));
        }
    }

    #[test]
    fn test_custom_k_factor() {
        let rules = StandoffRules { k_factor: 2.5 };
        assert!((required_distance(27.0, &rules) - 7.5).abs() < EPS);
    }

    #[test]
    fn test_assess() {
        let r = assess(19.0, 64.0, &StandoffRules::default());
        assert!((r.required_distance - 16.0).abs() < EPS);
        assert!((r.safety_factor - 1.1875).abs() < EPS);
        assert!(r.is_safe);
    }

    #[test]
    fn test_formula_label() {
        assert_eq!(formula_label(&StandoffRules::default()), "D = K × W^(1/3), K = 4");
    }
}
