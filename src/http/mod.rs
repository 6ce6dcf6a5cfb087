//! HTTP server module.
//!
//! Serves plain HTTP; TLS termination is left to the hosting platform.
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT with a configurable drain window

mod server;
mod shutdown;

pub use server::{bind_address, start_server, ServerError};
