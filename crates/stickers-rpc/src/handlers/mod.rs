//! Request handlers, split by surface.

mod messages;
mod search;

pub use messages::handle_messages;

use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use stickers_core::StickerError;
use tracing::{debug, error};

// ============================================================================
// JSON-RPC types
// ============================================================================

/// JSON-RPC 2.0 request structure.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

/// JSON-RPC "method not found".
pub const METHOD_NOT_FOUND: i32 = -32601;

// ============================================================================
// Parameter extraction helpers
// ============================================================================

/// Extract an optional string parameter, supporting both snake_case and camelCase.
///
/// A present value that is neither a string nor null is an invalid argument.
pub(crate) fn get_str_param<'a>(
    params: &'a Value,
    snake: &str,
    camel: &str,
) -> stickers_core::Result<Option<&'a str>> {
    match params.get(snake).or_else(|| params.get(camel)) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(StickerError::invalid_argument(
            snake,
            format!("expected a string, got {}", other),
        )),
    }
}

/// Extract an optional i64 parameter, supporting both snake_case and camelCase.
///
/// A present value that is neither an integer nor null is an invalid argument.
pub(crate) fn get_i64_param(
    params: &Value,
    snake: &str,
    camel: &str,
) -> stickers_core::Result<Option<i64>> {
    match params.get(snake).or_else(|| params.get(camel)) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            StickerError::invalid_argument(snake, format!("expected an integer, got {}", value))
        }),
    }
}

/// HTTP status for an error surfaced by a plain HTTP endpoint.
pub(crate) fn http_status_for(err: &StickerError) -> StatusCode {
    match err {
        StickerError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        StickerError::Network { .. }
        | StickerError::Timeout(_)
        | StickerError::HttpStatus { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ============================================================================
// HTTP handlers
// ============================================================================

/// Health check endpoint.
pub async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "configured": state.settings.config_uri.is_some()
    }))
}

/// Main JSON-RPC handler.
pub async fn handle_rpc(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    let method = &request.method;
    let params = request.params.unwrap_or(Value::Object(Default::default()));
    let id = request.id.clone();

    debug!("RPC call: {}({:?})", method, params);

    if method == "health_check" {
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::success(id, json!({"status": "ok"}))),
        );
    }

    match dispatch_method(&state, method, &params).await {
        Some(Ok(value)) => (StatusCode::OK, Json(JsonRpcResponse::success(id, value))),
        Some(Err(e)) => {
            error!("RPC error for {}: {}", method, e);
            let code = e.to_rpc_error_code();
            (
                StatusCode::OK,
                Json(JsonRpcResponse::error(id, code, e.to_string())),
            )
        }
        None => {
            debug!("Unknown RPC method: {}", method);
            (
                StatusCode::OK,
                Json(JsonRpcResponse::error(
                    id,
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", method),
                )),
            )
        }
    }
}

// ============================================================================
// Method dispatcher
// ============================================================================

/// Run a named method, or `None` if no such method exists.
async fn dispatch_method(
    state: &AppState,
    method: &str,
    params: &Value,
) -> Option<stickers_core::Result<Value>> {
    let result = match method {
        "search_stickers" => search::search_stickers(state, params).await,
        _ => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_param_accepts_both_spellings() {
        let params = json!({"config_uri": "a", "imageUri": "b"});
        assert_eq!(get_str_param(&params, "config_uri", "configUri").unwrap(), Some("a"));
        assert_eq!(get_str_param(&params, "image_uri", "imageUri").unwrap(), Some("b"));
        assert_eq!(get_str_param(&params, "missing", "missing").unwrap(), None);
    }

    #[test]
    fn test_str_param_rejects_non_strings() {
        let params = json!({"query": 5, "empty": null});
        assert!(get_str_param(&params, "query", "query")
            .unwrap_err()
            .is_client_error());
        assert_eq!(get_str_param(&params, "empty", "empty").unwrap(), None);
    }

    #[test]
    fn test_i64_param() {
        let params = json!({"skip": -3, "count": "ten"});
        assert_eq!(get_i64_param(&params, "skip", "skip").unwrap(), Some(-3));
        assert!(get_i64_param(&params, "count", "count").is_err());
        assert_eq!(get_i64_param(&params, "other", "other").unwrap(), None);
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            http_status_for(&StickerError::invalid_argument("x", "y")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            http_status_for(&StickerError::Network {
                message: "down".into(),
                source: None
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            http_status_for(&StickerError::Config {
                message: "bad".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let response = JsonRpcResponse::error(Some(json!(1)), METHOD_NOT_FOUND, "nope".into());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"]["code"], -32601);
        assert!(value.get("result").is_none());
        assert_eq!(value["jsonrpc"], "2.0");
    }
}
