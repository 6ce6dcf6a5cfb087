//! Diagnostic configuration endpoint.
//!
//! Reports the current `APP_MESSAGE` and whether `API_TOKEN` is set. This is an
//! operational aid with no authentication and is not a security boundary; the
//! token value is never part of the response.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::runtime::RuntimeConfig;

/// Body of `GET /debug-config`. Exactly these two fields.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DebugConfigResponse {
    pub app_message: String,
    pub has_api_token: bool,
}

impl From<&RuntimeConfig> for DebugConfigResponse {
    fn from(runtime: &RuntimeConfig) -> Self {
        Self {
            app_message: runtime.debug_message().to_string(),
            has_api_token: runtime.has_api_token(),
        }
    }
}

#[instrument(name = "debug_config::show", skip(runtime))]
pub async fn show(runtime: RuntimeConfig) -> Json<DebugConfigResponse> {
    tracing::debug!(has_api_token = runtime.has_api_token(), "Serving debug config");
    Json(DebugConfigResponse::from(&runtime))
}
