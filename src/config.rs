//! Configuration loading and constants.
//!
//! Loads the optional TOML configuration file and defines the constants used
//! across the service: bind defaults, response cache headers, logging defaults
//! and the names of the environment variables read at request time.
//! `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Bind to all interfaces by default
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Port the deployment platform routes traffic to
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Seconds to wait for in-flight requests after SIGTERM/SIGINT
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Probe and introspection responses reflect live process state and must never
// be served from an intermediate cache.

/// Probe and diagnostic responses - always revalidate
pub const HTTP_CACHE_NO_STORE_MAX_AGE: u32 = 0;

pub const CACHE_CONTROL_NO_STORE: &str =
    formatcp!("no-store, max-age={}", HTTP_CACHE_NO_STORE_MAX_AGE);

// =============================================================================
// Environment Variables and Defaults
// =============================================================================

/// Message interpolated into the greeting and reflected by `/debug-config`
pub const APP_MESSAGE_ENV: &str = "APP_MESSAGE";

/// Secret whose presence (never value) is reported by `/debug-config`
pub const API_TOKEN_ENV: &str = "API_TOKEN";

/// Greeting fallback when `APP_MESSAGE` is unset
pub const DEFAULT_GREETING_MESSAGE: &str = "Default message from code";

/// `/debug-config` fallback when `APP_MESSAGE` is unset.
/// Intentionally different from [`DEFAULT_GREETING_MESSAGE`].
pub const DEBUG_MISSING_MESSAGE: &str = "missing";

/// Banner that wraps the resolved message on `/`
pub const GREETING_BANNER: &str = "Hello from the reusable pipeline!";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "pipeline_responder=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Graceful shutdown window in seconds (default: 30)
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line, for log shippers
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Parsed log format. Only meaningful after [`AppConfig::validate`] has passed.
    pub fn log_format(&self) -> LogFormat {
        match self.format.as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the given path, or fall back to built-in defaults when no
    /// config file was requested.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cache_control_no_store_value() {
        assert_eq!(CACHE_CONTROL_NO_STORE, "no-store, max-age=0");
    }

    #[test]
    fn test_defaults_bind_all_interfaces_on_8080() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.shutdown_grace_seconds, 30);
        assert_eq!(config.logging.log_format(), LogFormat::Text);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            port = 9090

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.logging.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_port_zero_rejected() {
        let err = AppConfig::from_toml("[http]\nport = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = AppConfig::from_toml("[http\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nshutdown_grace_seconds = 5").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.shutdown_grace_seconds, 5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }
}
