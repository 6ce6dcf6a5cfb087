//! pipeline-responder entry point.
//!
//! Initializes tracing, loads the optional TOML configuration, builds the
//! router and serves it until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pipeline_responder::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use pipeline_responder::http::start_server;
use pipeline_responder::routes::create_router;
use pipeline_responder::state::AppState;

/// Minimal greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "pipeline-responder", version, about)]
struct Args {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "pipeline_responder=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config first so the log format is known before the subscriber is installed
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.log_format() {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config_file = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let state = AppState::new(config);
    let app = create_router(state.clone());

    start_server(app, &state.config.http).await?;

    Ok(())
}
