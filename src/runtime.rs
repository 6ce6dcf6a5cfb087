//! Per-request runtime configuration.
//!
//! `APP_MESSAGE` and `API_TOKEN` are injected by the deployment platform (a
//! configuration map and a secret store) and may change between requests in
//! tests, so they are read through an [`EnvSource`] every time a handler asks
//! for a [`RuntimeConfig`]. The API token itself is never stored: only whether
//! it is present.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::config::{
    API_TOKEN_ENV, APP_MESSAGE_ENV, DEBUG_MISSING_MESSAGE, DEFAULT_GREETING_MESSAGE,
};
use crate::state::AppState;

/// Read-only source of environment variables.
pub trait EnvSource: Send + Sync + 'static {
    /// Value of `key`, or `None` when unset or unreadable.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set to a non-empty value.
    fn is_present(&self, key: &str) -> bool {
        self.var(key).is_some_and(|value| !value.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-Unicode values are treated as unset
        std::env::var(key).ok()
    }

    fn is_present(&self, key: &str) -> bool {
        std::env::var_os(key).is_some_and(|value| !value.is_empty())
    }
}

/// Fixed in-memory environment, used to inject configuration in tests.
impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Snapshot of the environment-derived settings for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    app_message: Option<String>,
    has_api_token: bool,
}

impl RuntimeConfig {
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            app_message: env.var(APP_MESSAGE_ENV),
            has_api_token: env.is_present(API_TOKEN_ENV),
        }
    }

    /// Message for the greeting route.
    pub fn greeting_message(&self) -> &str {
        self.app_message
            .as_deref()
            .unwrap_or(DEFAULT_GREETING_MESSAGE)
    }

    /// Message for the diagnostic route. Uses a different fallback than
    /// [`Self::greeting_message`].
    pub fn debug_message(&self) -> &str {
        self.app_message.as_deref().unwrap_or(DEBUG_MISSING_MESSAGE)
    }

    pub fn has_api_token(&self) -> bool {
        self.has_api_token
    }
}

impl FromRequestParts<AppState> for RuntimeConfig {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_env(state.env.as_ref()))
    }
}
