//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::runtime::{EnvSource, ProcessEnv};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the file configuration loaded at startup and the environment source
/// that per-request [`RuntimeConfig`](crate::runtime::RuntimeConfig) values
/// are read from.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    /// Creates state that reads the real process environment.
    pub fn new(config: AppConfig) -> Self {
        Self::with_env(config, ProcessEnv)
    }

    /// Creates state backed by the given environment source.
    pub fn with_env(config: AppConfig, env: impl EnvSource) -> Self {
        Self {
            config: Arc::new(config),
            env: Arc::new(env),
        }
    }
}
