//! Messaging endpoint for compose-extension queries.

use super::http_status_for;
use super::search::find_stickers;
use crate::cards::ComposeExtensionResponse;
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

const COMPOSE_EXTENSION_QUERY: &str = "composeExtension/query";
const INITIAL_RUN_PARAMETER: &str = "initialRun";

/// The parts of an incoming activity this endpoint reads.
#[derive(Debug, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub activity_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl Activity {
    pub fn is_compose_extension_query(&self) -> bool {
        self.activity_type == "invoke"
            && self
                .name
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(COMPOSE_EXTENSION_QUERY))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeExtensionValue {
    #[serde(default)]
    pub parameters: Vec<ComposeExtensionParameter>,
    #[serde(default)]
    pub query_options: Option<QueryOptions>,
}

#[derive(Debug, Deserialize)]
pub struct ComposeExtensionParameter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryOptions {
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub count: Option<i64>,
}

impl ComposeExtensionValue {
    /// Query text from the first parameter.
    ///
    /// Only one parameter is expected, so its name is ignored, except that the
    /// picker's opening request (`initialRun`) has no query.
    pub fn query_text(&self) -> Option<&str> {
        let first = self.parameters.first()?;
        if first.name.as_deref() == Some(INITIAL_RUN_PARAMETER) {
            return None;
        }
        first.value.as_deref()
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, message.to_string()).into_response()
}

/// Compose-extension query endpoint.
pub async fn handle_messages(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    info!("Messages endpoint received a request.");

    let activity: Activity = match serde_json::from_slice(&body) {
        Ok(activity) => activity,
        Err(e) => {
            debug!("Failed to parse request payload: {}", e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if !activity.is_compose_extension_query() {
        debug!("Request payload was not a messaging extension query.");
        return bad_request("App only supports messaging extension query activity types.");
    }

    let value: ComposeExtensionValue = match activity.value {
        None => ComposeExtensionValue::default(),
        Some(raw) => match serde_json::from_value(raw) {
            Ok(value) => value,
            Err(e) => {
                debug!("Failed to parse compose extension value: {}", e);
                return bad_request("Malformed messaging extension query value.");
            }
        },
    };

    let options = value.query_options.as_ref();
    let result = find_stickers(
        &state,
        value.query_text(),
        options.and_then(|o| o.skip),
        options.and_then(|o| o.count),
    )
    .await;

    match result {
        Ok(stickers) => {
            debug!("Returning {} stickers", stickers.len());
            Json(ComposeExtensionResponse::from_stickers(&stickers)).into_response()
        }
        Err(e) => {
            error!("Sticker query failed: {}", e);
            (http_status_for(&e), e.to_string()).into_response()
        }
    }
}
