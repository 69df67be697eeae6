//! Snapshot validation
//!
//! The engine never sees a footprint with fewer than three vertices or a
//! non-positive weight; everything that reaches it passes through here.

use anyhow::{bail, ensure, Result};

use crate::consts::MIN_POLYGON_VERTICES;
use crate::geometry::{Building, Point};

use super::types::StandoffRules;

/// Check that a footprint has enough vertices and finite coordinates
pub fn validate_polygon(name: &str, polygon: &[Point]) -> Result<()> {
    ensure!(
        polygon.len() >= MIN_POLYGON_VERTICES,
        "building '{}' has {} vertices, at least {} required",
        name,
        polygon.len(),
        MIN_POLYGON_VERTICES
    );
    if let Some(p) = polygon.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        bail!("building '{}' has a non-finite vertex ({}, {})", name, p.x, p.y);
    }
    Ok(())
}

/// Check that an explosive weight is inside the scaling law's domain
pub fn validate_weight(weight: f64) -> Result<()> {
    ensure!(
        weight.is_finite() && weight > 0.0,
        "explosive weight must be a positive number, got {}",
        weight
    );
    Ok(())
}

/// Check that the scaling coefficient keeps required distances positive
pub fn validate_rules(rules: &StandoffRules) -> Result<()> {
    ensure!(
        rules.k_factor.is_finite() && rules.k_factor > 0.0,
        "k_factor must be a positive number, got {}",
        rules.k_factor
    );
    Ok(())
}

/// Validate every building in a site plus the weight and rules
pub fn validate_site(buildings: &[Building], weight: f64, rules: &StandoffRules) -> Result<()> {
    validate_rules(rules)?;
    validate_weight(weight)?;
    for b in buildings {
        validate_polygon(&b.name, &b.coordinates)?;
    }
    Ok(())
}
