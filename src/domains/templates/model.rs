//! Template model - the validated shape of a single template.
//!
//! A `Template` is an immutable value object built from one YAML file.
//! Validation happens at construction; a template that fails validation is
//! never represented as a partially-valid object.

use super::error::TemplateError;

/// A single template loaded from a YAML file.
///
/// All fields are trimmed and guaranteed non-empty; `template` is `None`
/// when the source file carried no `template` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    description: String,
    instructions: String,
    template: Option<String>,
}

impl Template {
    /// Build a template from raw field values, trimming and validating each.
    ///
    /// `name` comes from the source file's stem, never from file content.
    /// The optional `template` payload must be non-empty when present.
    pub fn new(
        name: &str,
        description: &str,
        instructions: &str,
        template: Option<&str>,
    ) -> Result<Self, TemplateError> {
        let name = non_empty(name, "name")?;
        let description = non_empty(description, "description")?;
        let instructions = non_empty(instructions, "instructions")?;
        let template = template.map(|t| non_empty(t, "template")).transpose()?;

        Ok(Self {
            name,
            description,
            instructions,
            template,
        })
    }

    /// The template name, derived from the source filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable summary, surfaced as the registered tool's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The primary payload returned to callers.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// The optional secondary payload (e.g. a skeleton document).
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// The MCP tool name this template is registered under.
    pub fn tool_name(&self) -> String {
        format!("get_{}_template", self.name)
    }
}

/// Trim a field value and reject it if nothing remains.
fn non_empty(value: &str, field: &'static str) -> Result<String, TemplateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TemplateError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_template_round_trip() {
        let template = Template::new("weekly_update", "d1", "i1", Some("t1")).unwrap();
        assert_eq!(template.name(), "weekly_update");
        assert_eq!(template.description(), "d1");
        assert_eq!(template.instructions(), "i1");
        assert_eq!(template.template(), Some("t1"));
    }

    #[test]
    fn test_template_payload_optional() {
        let template = Template::new("minimal", "d", "i", None).unwrap();
        assert_eq!(template.template(), None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let template = Template::new("  padded  ", "  d  ", "\n  i  \n", Some("  t  ")).unwrap();
        assert_eq!(template.name(), "padded");
        assert_eq!(template.description(), "d");
        assert_eq!(template.instructions(), "i");
        assert_eq!(template.template(), Some("t"));
    }

    #[test]
    fn test_empty_required_field_rejected() {
        let result = Template::new("name", "", "i", None);
        assert!(matches!(result, Err(TemplateError::EmptyField("description"))));
    }

    #[test]
    fn test_whitespace_only_instructions_rejected() {
        let result = Template::new("name", "d", "   \n\t  ", None);
        assert!(matches!(result, Err(TemplateError::EmptyField("instructions"))));
    }

    #[test]
    fn test_blank_optional_template_rejected() {
        let result = Template::new("name", "d", "i", Some("   "));
        assert!(matches!(result, Err(TemplateError::EmptyField("template"))));
    }

    #[test]
    fn test_tool_name_derivation() {
        let template = Template::new("weekly_update", "d", "i", None).unwrap();
        assert_eq!(template.tool_name(), "get_weekly_update_template");
    }
}
