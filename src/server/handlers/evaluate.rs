//! Evaluation handlers: Evaluate, ClosestPoints, Centroids, SafetyDistance, SiteCheck

use serde::Deserialize;
use std::time::Instant;

use crate::geometry::Building;
use crate::server::protocol::{error_codes, Response};
use crate::server::state::ServerState;
use crate::standoff::{
    centroid, evaluate_buildings, evaluate_site, find_closest_points, find_site_violations,
    formula_label, required_distance, validate_rules, validate_weight, StandoffRules,
};

#[derive(Deserialize, Default)]
struct PairParams {
    #[serde(default)]
    building_a: Option<String>,
    #[serde(default)]
    building_b: Option<String>,
    #[serde(default)]
    explosive_weight: Option<f64>,
    #[serde(default)]
    k_factor: Option<f64>,
}

fn parse_params<T: for<'de> Deserialize<'de> + Default>(
    id: &Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Result<T, Response> {
    match params {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(p) => serde_json::from_value(p).map_err(|e| {
            Response::error(id.clone(), error_codes::INVALID_PARAMS, format!("Invalid params: {}", e))
        }),
    }
}

/// Look up the requested pair, falling back to the first two buildings
fn resolve_pair<'a>(
    state: &'a ServerState,
    id: &Option<serde_json::Value>,
    params: &PairParams,
) -> Result<(&'a Building, &'a Building), Response> {
    if !state.is_scene_loaded() {
        return Err(Response::error(id.clone(), error_codes::NO_SCENE_LOADED,
            "No scene loaded. Call Load or SetScene first.".to_string()));
    }

    let lookup = move |name: &str| {
        state.buildings.get(name).ok_or_else(|| {
            Response::error(id.clone(), error_codes::BUILDING_NOT_FOUND,
                format!("Building '{}' not found", name))
        })
    };

    match (&params.building_a, &params.building_b) {
        (Some(a), Some(b)) => Ok((lookup(a)?, lookup(b)?)),
        (None, None) => state.default_pair().ok_or_else(|| {
            Response::error(id.clone(), error_codes::INVALID_SNAPSHOT,
                "Scene needs at least two buildings".to_string())
        }),
        _ => Err(Response::error(id.clone(), error_codes::INVALID_PARAMS,
            "Specify both building_a and building_b, or neither".to_string())),
    }
}

/// Weight and rules for one request: the stored snapshot with any overrides.
/// Nothing is written back; callers commit once the request has succeeded.
fn resolve_overrides(
    state: &ServerState,
    id: &Option<serde_json::Value>,
    weight: Option<f64>,
    k_factor: Option<f64>,
) -> Result<(f64, StandoffRules), Response> {
    let weight = weight.unwrap_or(state.explosive_weight);
    let rules = StandoffRules {
        k_factor: k_factor.unwrap_or(state.rules.k_factor),
    };
    validate_weight(weight)
        .and_then(|_| validate_rules(&rules))
        .map_err(|e| Response::error(id.clone(), error_codes::INVALID_SNAPSHOT, e.to_string()))?;
    Ok((weight, rules))
}

/// Overrides persist like the rest of the snapshot
fn commit_overrides(state: &mut ServerState, weight: f64, rules: StandoffRules) {
    state.explosive_weight = weight;
    state.rules = rules;
}

/// Handle Evaluate request - full evaluation of one building pair
pub fn handle_evaluate(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: PairParams = match parse_params(&id, params) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let (weight, rules) = match resolve_overrides(state, &id, params.explosive_weight, params.k_factor) {
        Ok(resolved) => resolved,
        Err(resp) => return resp,
    };

    let (a, b) = match resolve_pair(state, &id, &params) {
        Ok(pair) => pair,
        Err(resp) => return resp,
    };

    let start = Instant::now();
    let report = match evaluate_buildings(a, b, weight, &rules) {
        Ok(r) => r,
        Err(e) => return Response::error(id, error_codes::INVALID_SNAPSHOT, format!("{:#}", e)),
    };
    commit_overrides(state, weight, rules);

    let result = report.evaluation.result;
    log::info!(
        "[Server] {} vs {}: {:.2} actual, {:.2} required, {} in {:.2}ms",
        report.building_a,
        report.building_b,
        result.actual_distance,
        result.required_distance,
        result.verdict(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Response::success(id, serde_json::json!({
        "report": report,
        "verdict": result.verdict(),
        "explosive_weight": state.explosive_weight,
        "formula": formula_label(&state.rules),
    }))
}

/// Handle ClosestPoints request - closest point pair of one building pair
pub fn handle_closest_points(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: PairParams = match parse_params(&id, params) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let (a, b) = match resolve_pair(state, &id, &params) {
        Ok(pair) => pair,
        Err(resp) => return resp,
    };

    Response::typed(id, &find_closest_points(&a.coordinates, &b.coordinates))
}

/// Handle Centroids request - vertex centroid of every building, for labels
pub fn handle_centroids(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    if !state.is_scene_loaded() {
        return Response::error(id, error_codes::NO_SCENE_LOADED,
            "No scene loaded. Call Load or SetScene first.".to_string());
    }

    let centroids: Vec<serde_json::Value> = state
        .buildings
        .values()
        .map(|b| serde_json::json!({ "name": b.name, "centroid": centroid(&b.coordinates) }))
        .collect();

    Response::success(id, serde_json::Value::Array(centroids))
}

/// Handle SafetyDistance request - required standoff for a weight
pub fn handle_safety_distance(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct SafetyParams {
        explosive_weight: f64,
        #[serde(default)]
        k_factor: Option<f64>,
    }

    let params: SafetyParams = match params.and_then(|p| serde_json::from_value(p).ok()) {
        Some(p) => p,
        None => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected {explosive_weight: number}".to_string());
        }
    };

    let (weight, rules) = match resolve_overrides(state, &id, Some(params.explosive_weight), params.k_factor) {
        Ok(resolved) => resolved,
        Err(resp) => return resp,
    };

    Response::success(id, serde_json::json!({
        "required_distance": required_distance(weight, &rules),
        "formula": formula_label(&rules),
    }))
}

/// Handle SiteCheck request - every pair, or only the unsafe ones
pub fn handle_site_check(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize, Default)]
    struct SiteCheckParams {
        #[serde(default)]
        violations_only: bool,
        #[serde(default)]
        explosive_weight: Option<f64>,
        #[serde(default)]
        k_factor: Option<f64>,
    }

    let params: SiteCheckParams = match parse_params(&id, params) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let (weight, rules) = match resolve_overrides(state, &id, params.explosive_weight, params.k_factor) {
        Ok(resolved) => resolved,
        Err(resp) => return resp,
    };
    if !state.is_scene_loaded() {
        return Response::error(id, error_codes::NO_SCENE_LOADED,
            "No scene loaded. Call Load or SetScene first.".to_string());
    }

    let buildings = state.building_list();
    let start = Instant::now();
    let reports = if params.violations_only {
        find_site_violations(&buildings, weight, &rules)
    } else {
        evaluate_site(&buildings, weight, &rules)
    };
    let reports = match reports {
        Ok(r) => r,
        Err(e) => return Response::error(id, error_codes::INVALID_SNAPSHOT, format!("{:#}", e)),
    };
    let elapsed = start.elapsed();
    commit_overrides(state, weight, rules);

    Response::success(id, serde_json::json!({
        "status": "ok",
        "pair_count": reports.len(),
        "unsafe_count": reports.iter().filter(|r| !r.evaluation.result.is_safe).count(),
        "required_distance": required_distance(weight, &rules),
        "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
        "pairs": reports,
    }))
}
