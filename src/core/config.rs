//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated from environment variables (with `.env` support) or defaults.
//! The configuration is built once at startup and passed by reference into
//! the API client and the tool handlers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Default base URL of the Boomi AtomSphere REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.boomi.com/api/rest/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Boomi AtomSphere credentials and endpoint.
    pub boomi: BoomiConfig,

    /// Local filesystem paths for diagnostics and XML dumps.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Boomi AtomSphere credentials and endpoint configuration.
///
/// All four credential fields must be non-empty for the configuration to be
/// considered valid; there is no partial-validity state.
#[derive(Clone, Serialize, Deserialize)]
pub struct BoomiConfig {
    /// AtomSphere user name (basic-auth username).
    pub user: String,

    /// AtomSphere API token (basic-auth password).
    pub token: String,

    /// Account identifier, used as the first path segment of every endpoint.
    pub account_id: String,

    /// Default environment identifier, substituted when a caller passes the
    /// `"test"` sentinel.
    pub environment_id: String,

    /// Base URL of the AtomSphere REST API. Overridable for testing.
    pub base_url: String,
}

/// Custom Debug implementation to redact the API token from logs.
impl std::fmt::Debug for BoomiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoomiConfig")
            .field("user", &self.user)
            .field("token", &"[REDACTED]")
            .field("account_id", &self.account_id)
            .field("environment_id", &self.environment_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Local filesystem paths used for best-effort side-channel writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where raw component XML is dumped after each successful
    /// component-details fetch.
    pub dump_dir: PathBuf,

    /// Path of the diagnostic marker file written when credentials are
    /// incomplete.
    pub diagnostics_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for BoomiConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            token: String::new(),
            account_id: String::new(),
            environment_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dump_dir: std::env::temp_dir().join("boomi_component_dumps"),
            diagnostics_path: std::env::temp_dir().join("boomi_credentials_missing.txt"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "boomi-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            boomi: BoomiConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Credentials are read from `BOOMI_USER`, `BOOMI_TOKEN`,
    /// `BOOMI_ACCOUNT_ID` and `BOOMI_ENVIRONMENT_ID`. Server behavior is
    /// tuned through `MCP_`-prefixed variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(user) = std::env::var("BOOMI_USER") {
            config.boomi.user = user;
        }

        if let Ok(token) = std::env::var("BOOMI_TOKEN") {
            config.boomi.token = token;
        }

        if let Ok(account_id) = std::env::var("BOOMI_ACCOUNT_ID") {
            config.boomi.account_id = account_id;
        }

        if let Ok(environment_id) = std::env::var("BOOMI_ENVIRONMENT_ID") {
            config.boomi.environment_id = environment_id;
        }

        if let Ok(base_url) = std::env::var("BOOMI_BASE_URL") {
            if base_url.is_empty() {
                warn!("Empty BOOMI_BASE_URL ignored; using {}", DEFAULT_BASE_URL);
            } else {
                config.boomi.base_url = base_url;
            }
        }

        if let Ok(dump_dir) = std::env::var("MCP_DUMP_DIR") {
            config.storage.dump_dir = PathBuf::from(dump_dir);
        }

        if let Ok(diagnostics_path) = std::env::var("MCP_DIAGNOSTICS_PATH") {
            config.storage.diagnostics_path = PathBuf::from(diagnostics_path);
        }

        config
    }
}
