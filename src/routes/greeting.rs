//! Greeting page handler.

use tracing::instrument;

use crate::config::GREETING_BANNER;
use crate::runtime::RuntimeConfig;

/// Compose the greeting body for a resolved message.
pub fn compose_greeting(message: &str) -> String {
    format!("{} Message: {}", GREETING_BANNER, message)
}

/// Greeting handler. Served as `text/plain; charset=utf-8`.
#[instrument(name = "greeting::index", skip(runtime))]
pub async fn index(runtime: RuntimeConfig) -> String {
    compose_greeting(runtime.greeting_message())
}
