//! MCP Server implementation and lifecycle management.
//!
//! The server performs one load pass at construction: scan the configured
//! templates directory, validate each file, and register one tool per valid
//! template. The pipeline is strictly sequential (load, then register, then
//! serve) and runs exactly once per process; a restart is the only way to
//! pick up new or changed template files.

use rmcp::{
    ServerHandler, ServiceExt, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Error;
use crate::domains::templates::TemplateLoader;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; tool listing and dispatch
/// are routed through the ToolRouter built from the loaded templates.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Loads templates from the configured directory and builds the tool
    /// router. Zero loaded templates is a valid outcome; the server still
    /// starts and serves its static tools.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let loader = TemplateLoader::new(&config.templates.path);
        let templates = loader.load();

        Self {
            tool_router: build_tool_router::<Self>(&templates),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of tools currently registered.
    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    /// Serve the MCP protocol over stdin/stdout until the client disconnects.
    pub async fn run_stdio(self) -> super::error::Result<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Template MCP server - exposes YAML-defined templates as get_<name>_template tools."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(path: &str) -> Config {
        let mut config = Config::default();
        config.templates.path = path.to_string();
        config
    }

    #[test]
    fn test_server_with_missing_templates_dir() {
        let server = McpServer::new(config_for("/nonexistent/path/12345"));
        // Static tools only.
        assert_eq!(server.tool_count(), 1);
    }

    #[test]
    fn test_server_registers_loaded_templates() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("weekly_update.yaml"),
            "description: d\ninstructions: i\ntemplate: t\n",
        )
        .unwrap();

        let server = McpServer::new(config_for(&temp_dir.path().to_string_lossy()));
        assert_eq!(server.tool_count(), 2);

        let names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert!(names.contains(&"get_weekly_update_template".to_string()));
        assert!(names.contains(&"get_current_date".to_string()));
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let server = McpServer::new(config_for("/nonexistent/path/12345"));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
    }
}
