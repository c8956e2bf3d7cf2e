//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - static tool implementations (one file per tool)
//! - `router.rs` - builds the ToolRouter, synthesizing one tool per loaded
//!   template plus the static definitions
//!
//! Template tools are registered dynamically at startup; adding a template
//! file does not require touching any code here.

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
