//! JSON-RPC protocol types for the standoff server
//!
//! One request per stdin line, one response per stdout line:
//!
//! ```text
//! -> {"id": 1, "method": "Evaluate", "params": {"building_a": "Depot", "building_b": "Office"}}
//! <- {"id": 1, "result": {"report": {...}, "verdict": "SAFE", ...}}
//! ```
//!
//! Methods: `Load`, `SetScene`, `GetScene` change or read the snapshot;
//! `Evaluate`, `ClosestPoints`, `Centroids`, `SafetyDistance`, `SiteCheck`
//! run the engine against it; `Shutdown` ends the session. Snapshot
//! validation failures (too few vertices, non-positive weight or K,
//! duplicate names) come back as `INVALID_SNAPSHOT` and leave the stored
//! snapshot unchanged.

use serde::{Deserialize, Serialize};

/// JSON-RPC Request format
#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: Option<serde_json::Value>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC Response format
#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

/// JSON-RPC Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
}

impl Response {
    /// Create a success response with a JSON value
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Response {
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create a success response from any serializable value
    pub fn typed<T: Serialize>(id: Option<serde_json::Value>, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::success(id, value),
            Err(e) => Self::error(id, error_codes::INTERNAL_ERROR, format!("Failed to serialize result: {}", e)),
        }
    }

    /// Create an error response
    pub fn error(id: Option<serde_json::Value>, code: i32, message: String) -> Self {
        Response {
            id,
            result: None,
            error: Some(ErrorResponse { code, message }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Custom error codes
    pub const INVALID_SNAPSHOT: i32 = 2;
    pub const NO_SCENE_LOADED: i32 = 3;
    pub const BUILDING_NOT_FOUND: i32 = 4;
    pub const LOAD_FAILED: i32 = 5;
}
