//! pipeline-responder: a minimal greeting and health-check HTTP service.
//!
//! Exposes `GET /`, `GET /healthz` and `GET /debug-config`. Used as a
//! liveness target in a continuous-deployment pipeline; the platform supplies
//! `APP_MESSAGE` and `API_TOKEN` through the environment.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod runtime;
pub mod state;
