//! Template-specific error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The file's top-level YAML structure is not a mapping.
    #[error("not a valid YAML mapping")]
    NotAMapping,

    /// The file could not be parsed as YAML, or a field has the wrong shape.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A required field is missing, empty, or whitespace-only.
    #[error("field '{0}' must be a non-empty string")]
    EmptyField(&'static str),

    /// Another file in the same load already produced this template name.
    #[error("duplicate template name: {0}")]
    DuplicateName(String),

    /// I/O error while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
