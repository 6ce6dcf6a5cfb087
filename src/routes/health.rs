//! Health check endpoint for container orchestration.
//!
//! Provides a liveness/readiness probe that returns 200 OK when the process is running.
//! It does no I/O and reads no configuration, so it stays within any probe timeout.

/// Health check handler.
///
/// Returns a simple "ok" response to indicate the service is running.
pub async fn healthz() -> &'static str {
    "ok"
}
