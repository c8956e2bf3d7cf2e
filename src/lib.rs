//! Template MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that loads
//! user-authored YAML template files at startup and exposes each one as a
//! dynamically named tool (`get_<name>_template`).
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, and the main server
//! - **domains**: business logic organized by bounded contexts
//!   - **templates**: the template model and the YAML loader
//!   - **tools**: tool definitions and the router that registers one tool
//!     per loaded template
//!
//! # Example
//!
//! ```rust,no_run
//! use template_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     server.run_stdio().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
