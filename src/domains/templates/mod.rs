//! Templates domain module.
//!
//! This module owns the template pipeline: the validated template model and
//! the loader that scans a directory of YAML files at startup.
//!
//! ## Architecture
//!
//! - `model.rs` - the `Template` value object and its naming derivation
//! - `loader.rs` - directory scan, YAML parsing, and validation
//! - `error.rs` - template-specific error types
//!
//! Loaded templates are handed to `domains::tools::build_tool_router`, which
//! registers one tool per template.

mod error;
mod loader;
mod model;

pub use error::TemplateError;
pub use loader::TemplateLoader;
pub use model::Template;
