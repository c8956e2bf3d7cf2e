//! Template loader - scans a directory for YAML template files.
//!
//! The loader resolves the configured root path once, then performs a single
//! synchronous load pass at startup: enumerate `*.yml` / `*.yaml` files,
//! parse and validate each, and collect the valid subset. A malformed file is
//! skipped with an error log; it never aborts the load of the other files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info, warn};

use super::error::TemplateError;
use super::model::Template;

/// Raw field layout of a template file. Unknown keys are ignored; missing
/// keys default to absent and are caught by `Template` validation.
#[derive(Debug, Deserialize)]
struct RawTemplate {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    template: Option<String>,
}

/// Loads YAML template files from a configured root directory.
pub struct TemplateLoader {
    root: PathBuf,
}

impl TemplateLoader {
    /// Create a loader for the given path. Home-directory shorthand (`~`) is
    /// expanded and the path is made absolute before use.
    pub fn new(path: &str) -> Self {
        Self {
            root: resolve_path(path),
        }
    }

    /// The resolved root directory this loader scans.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load all valid templates from the root directory.
    ///
    /// A missing or non-directory root yields an empty result with a
    /// diagnostic; per-file failures are logged and skipped. If two files
    /// derive the same template name (e.g. `a.yml` and `a.yaml`), the second
    /// in lexical order is skipped.
    pub fn load(&self) -> Vec<Template> {
        if !self.root.exists() {
            warn!("templates path does not exist: {}", self.root.display());
            return Vec::new();
        }

        if !self.root.is_dir() {
            error!("templates path is not a directory: {}", self.root.display());
            return Vec::new();
        }

        let mut templates = Vec::new();
        let mut seen_names: HashSet<String> = HashSet::new();

        for path in self.candidate_files() {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match self.load_file(&path) {
                Ok(template) => {
                    if !seen_names.insert(template.name().to_string()) {
                        let err = TemplateError::DuplicateName(template.name().to_string());
                        error!("template {} skipped: {}", file_name, err);
                        continue;
                    }
                    templates.push(template);
                }
                Err(err) => {
                    error!("template {} skipped: {}", file_name, err);
                }
            }
        }

        info!(
            "loaded {} templates from {}",
            templates.len(),
            self.root.display()
        );
        templates
    }

    /// Enumerate direct child files with a `yml` or `yaml` extension,
    /// sorted by filename so registration order is deterministic.
    fn candidate_files(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                error!(
                    "failed to read templates directory {}: {}",
                    self.root.display(),
                    err
                );
                return Vec::new();
            }
        };

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_yaml_extension(path))
            .collect();

        candidates.sort();
        candidates
    }

    /// Parse and validate a single YAML template file.
    fn load_file(&self, path: &Path) -> Result<Template, TemplateError> {
        let content = fs::read_to_string(path)?;

        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        if !value.is_mapping() {
            return Err(TemplateError::NotAMapping);
        }

        let raw: RawTemplate = serde_yaml::from_value(value)?;

        // The template name comes from the filename, not the file content.
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Template::new(
            &name,
            raw.description.as_deref().unwrap_or(""),
            raw.instructions.as_deref().unwrap_or(""),
            raw.template.as_deref(),
        )
    }
}

/// True when the path's extension is exactly `yml` or `yaml`.
fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Expand `~` to the user's home directory, then make the path absolute.
fn resolve_path(path: &str) -> PathBuf {
    let expanded = if path == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(path))
    } else if let Some(rest) = path.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        }
    } else {
        PathBuf::from(path)
    };

    std::path::absolute(&expanded).unwrap_or(expanded)
}
