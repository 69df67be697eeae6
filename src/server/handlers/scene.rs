//! Scene handlers: Load, SetScene, GetScene

use serde::Deserialize;

use crate::geometry::Building;
use crate::scene::{read_scene, Scene};
use crate::server::protocol::{error_codes, Response};
use crate::server::state::ServerState;

/// Handle Load request - reads a scene file from disk
pub fn handle_load(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct LoadParams {
        path: String,
    }

    let params: LoadParams = match params.and_then(|p| serde_json::from_value(p).ok()) {
        Some(p) => p,
        None => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected {path: string}".to_string());
        }
    };

    log::info!("[Server] Loading scene: {}", params.path);

    let scene = match read_scene(&params.path) {
        Ok(scene) => scene,
        Err(e) => {
            return Response::error(id, error_codes::LOAD_FAILED, format!("{:#}", e));
        }
    };

    // Keep the previous snapshot if the file's scene is invalid
    if let Err(e) = scene.validate() {
        return Response::error(id, error_codes::INVALID_SNAPSHOT, format!("{:#}", e));
    }

    state.apply_scene(scene);
    state.scene_path = Some(params.path);

    Response::success(id, serde_json::json!({
        "status": "ok",
        "building_count": state.buildings.len(),
        "explosive_weight": state.explosive_weight,
        "k_factor": state.rules.k_factor,
    }))
}

/// Handle SetScene request - replaces the snapshot from inline data
pub fn handle_set_scene(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct SetSceneParams {
        buildings: Vec<Building>,
        #[serde(default)]
        explosive_weight: Option<f64>,
        #[serde(default)]
        k_factor: Option<f64>,
    }

    let params: SetSceneParams = match params.map(serde_json::from_value) {
        Some(Ok(p)) => p,
        Some(Err(e)) => {
            return Response::error(id, error_codes::INVALID_PARAMS, format!("Invalid params: {}", e));
        }
        None => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected {buildings: [...]}".to_string());
        }
    };

    let mut scene = Scene {
        buildings: params.buildings,
        explosive_weight: params.explosive_weight.unwrap_or(state.explosive_weight),
        rules: state.rules,
    };
    if let Some(k) = params.k_factor {
        scene.rules.k_factor = k;
    }

    // Keep the previous snapshot if the new one is invalid
    if let Err(e) = scene.validate() {
        return Response::error(id, error_codes::INVALID_SNAPSHOT, format!("{:#}", e));
    }

    log::debug!("[Server] Scene replaced: {} buildings", scene.buildings.len());
    state.apply_scene(scene);
    state.scene_path = None;

    Response::success(id, serde_json::json!({
        "status": "ok",
        "building_count": state.buildings.len(),
    }))
}

/// Handle GetScene request - returns the current snapshot
pub fn handle_get_scene(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    let scene = Scene {
        buildings: state.building_list(),
        explosive_weight: state.explosive_weight,
        rules: state.rules,
    };
    match serde_json::to_value(&scene) {
        Ok(scene) => Response::success(id, serde_json::json!({
            "scene_path": state.scene_path,
            "scene": scene,
        })),
        Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, format!("Failed to serialize scene: {}", e)),
    }
}
