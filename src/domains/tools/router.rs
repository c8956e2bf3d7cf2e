//! Tool Router - binds loaded templates to registered tools.
//!
//! Every valid template yields one zero-argument tool named
//! `get_<name>_template`, whose handler returns the template's payload. The
//! static `get_current_date` utility is registered on the same router.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use crate::domains::templates::Template;

use super::definitions::CurrentDateTool;

/// Parameters for a template tool (none - template tools take no arguments).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTemplateParams {}

/// Build the tool router: one route per loaded template, plus the static
/// utility tools.
pub fn build_tool_router<S>(templates: &[Template]) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new().with_route(CurrentDateTool::create_route());

    for template in templates {
        debug!("Registering tool: {}", template.tool_name());
        router = router.with_route(template_route(template));
    }

    router
}

/// Create a ToolRoute for a single template.
///
/// The handler captures the rendered payload by value, so it stays valid for
/// the lifetime of the router regardless of what happens to the template
/// collection after registration.
fn template_route<S>(template: &Template) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let tool = Tool {
        name: template.tool_name().into(),
        description: Some(template.description().to_string().into()),
        input_schema: cached_schema_for_type::<GetTemplateParams>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    };

    let payload = response_payload(template).to_string();

    ToolRoute::new_dyn(tool, move |_ctx: ToolCallContext<'_, S>| {
        let payload = payload.clone();
        async move { Ok(CallToolResult::success(vec![Content::text(payload)])) }.boxed()
    })
}

/// Build the JSON payload a template tool returns when called.
///
/// The `template` key is omitted entirely when the template carries no
/// secondary payload; callers always get `instructions`.
fn response_payload(template: &Template) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "instructions": template.instructions(),
    });
    if let Some(body) = template.template() {
        payload["template"] = serde_json::Value::String(body.to_string());
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn template(name: &str, body: Option<&str>) -> Template {
        Template::new(name, "a description", "some instructions", body).unwrap()
    }

    #[test]
    fn test_build_router_empty() {
        let router: ToolRouter<TestServer> = build_tool_router(&[]);
        let tools = router.list_all();

        // Only the static utility tool.
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "get_current_date");
    }

    #[test]
    fn test_build_router_registers_template_tools() {
        let templates = vec![template("weekly_update", None), template("retro", Some("body"))];
        let router: ToolRouter<TestServer> = build_tool_router(&templates);
        let tools = router.list_all();

        assert_eq!(tools.len(), 3);
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_weekly_update_template"));
        assert!(names.contains(&"get_retro_template"));
        assert!(names.contains(&"get_current_date"));
    }

    #[test]
    fn test_template_tool_description() {
        let templates = vec![template("weekly_update", None)];
        let router: ToolRouter<TestServer> = build_tool_router(&templates);
        let tools = router.list_all();

        let tool = tools
            .iter()
            .find(|t| t.name.as_ref() == "get_weekly_update_template")
            .unwrap();
        assert_eq!(tool.description.as_deref(), Some("a description"));
    }

    #[test]
    fn test_response_payload_with_template_body() {
        let payload = response_payload(&template("t", Some("body")));
        assert_eq!(payload["instructions"], "some instructions");
        assert_eq!(payload["template"], "body");
    }

    #[test]
    fn test_response_payload_omits_absent_template() {
        let payload = response_payload(&template("t", None));
        assert_eq!(payload["instructions"], "some instructions");
        assert!(payload.get("template").is_none());
    }
}
