//! Current date tool definition.
//!
//! A zero-argument utility tool that returns the current local date. It lives
//! alongside the dynamically registered template tools on the same router.

use chrono::Local;
use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

/// Parameters for the current date tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CurrentDateParams {}

/// Current date tool - returns today's date as `YYYY-MM-DD`.
pub struct CurrentDateTool;

impl CurrentDateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_date";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Return the current date in YYYY-MM-DD format";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        let date = Local::now().format("%Y-%m-%d").to_string();
        info!("Current date tool called: {}", date);
        CallToolResult::success(vec![Content::text(date)])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CurrentDateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for this tool.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}
