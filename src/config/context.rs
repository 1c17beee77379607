//! Render contexts passed to the template engine.
//!
//! Field names serialize in PascalCase so blueprint bodies can reference
//! them as `{{.ProjectName}}`, `{{.GoVersion}}` and so on.

use super::generation::GenerationConfig;
use crate::blueprint::Dependency;
use serde::Serialize;

/// Context for ordinary files and templated directory/file paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderContext<'a> {
    pub project_name: &'a str,
    /// Project type tag (`cli`, `web`, ...).
    pub project_type: &'a str,
    pub go_version: &'a str,
    pub year: i32,
}

/// Narrow context for `README.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadmeContext<'a> {
    pub project_name: &'a str,
    /// Display label (`CLI`, `Web Service`, ...).
    pub project_type: &'a str,
}

impl<'a> ReadmeContext<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            project_name: config.name(),
            project_type: config.project_type().label(),
        }
    }
}

/// Context for `go.mod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManifestContext<'a> {
    pub project_name: &'a str,
    pub go_version: &'a str,
    /// Body of the `require ( ... )` block, one tab-indented line per dependency.
    pub requires: String,
}

impl<'a> ManifestContext<'a> {
    pub fn new(config: &'a GenerationConfig, dependencies: &[Dependency]) -> Self {
        let requires = dependencies
            .iter()
            .map(|dep| format!("\t{} {}\n", dep.module, dep.version))
            .collect();

        Self {
            project_name: config.name(),
            go_version: config.go_version(),
            requires,
        }
    }
}
