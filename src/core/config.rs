//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default location templates are loaded from when `MCP_TEMPLATES_PATH` is
/// unset. The `~` is expanded by the loader.
pub const DEFAULT_TEMPLATES_PATH: &str = "~/.config/template-mcp/templates";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Templates domain configuration.
    pub templates: TemplatesConfig,

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

/// Configuration for the templates domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory the template YAML files are loaded from. May start with `~`.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_TEMPLATES_PATH.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "template-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            templates: TemplatesConfig::default(),
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
    /// Environment variables are prefixed with `MCP_`:
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TEMPLATES_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(path) = std::env::var("MCP_TEMPLATES_PATH") {
            info!("Templates path set from environment: {}", path);
            config.templates.path = path;
        } else {
            warn!(
                "MCP_TEMPLATES_PATH not set - falling back to {}",
                DEFAULT_TEMPLATES_PATH
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_templates_path_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TEMPLATES_PATH", "/tmp/my-templates");
        }
        let config = Config::from_env();
        assert_eq!(config.templates.path, "/tmp/my-templates");
        unsafe {
            std::env::remove_var("MCP_TEMPLATES_PATH");
        }
    }

    #[test]
    fn test_templates_path_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_TEMPLATES_PATH");
        }
        let config = Config::from_env();
        assert_eq!(config.templates.path, DEFAULT_TEMPLATES_PATH);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "template-mcp-server");
        assert_eq!(config.logging.level, "info");
    }
}
