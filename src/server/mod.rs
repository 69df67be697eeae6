//! Standoff server - line-delimited JSON-RPC over stdin/stdout
//!
//! The server holds one snapshot (buildings, weight, rules) and recomputes on
//! demand: every evaluation request runs the engine against the current
//! snapshot. Clients push edits by replacing the snapshot with SetScene.
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Server state management
//! - `util` - Logger setup
//! - `handlers` - Request handlers organized by functionality

pub mod handlers;
pub mod protocol;
pub mod state;
pub mod util;

pub use protocol::{Request, Response, ErrorResponse, error_codes};
pub use state::ServerState;

use handlers::*;

/// Route one request to its handler.
/// Returns the response and whether the server should stop.
pub fn dispatch(state: &mut ServerState, request: Request) -> (Response, bool) {
    let Request { id, method, params } = request;
    let response = match method.as_str() {
        "Load" => handle_load(state, id, params),
        "SetScene" => handle_set_scene(state, id, params),
        "GetScene" => handle_get_scene(state, id),
        "Evaluate" => handle_evaluate(state, id, params),
        "ClosestPoints" => handle_closest_points(state, id, params),
        "Centroids" => handle_centroids(state, id),
        "SafetyDistance" => handle_safety_distance(state, id, params),
        "SiteCheck" => handle_site_check(state, id, params),
        "Shutdown" => {
            return (Response::success(id, serde_json::json!({ "status": "ok" })), true);
        }
        _ => Response::error(id, error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", method)),
    };
    (response, false)
}

/// Parse and dispatch one input line; parse failures become error responses
pub fn handle_line(state: &mut ServerState, line: &str) -> (Response, bool) {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(state, request),
        Err(e) => {
            log::warn!("[Server] Failed to parse request: {}", e);
            (Response::error(None, error_codes::PARSE_ERROR, format!("Parse error: {}", e)), false)
        }
    }
}
