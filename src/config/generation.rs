//! The per-run generation configuration.

use super::context::RenderContext;
use super::types::{DEFAULT_GO_VERSION, ProjectType};
use crate::error::{Result, ScaffoldError};
use chrono::Datelike;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PROJECT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("Invalid project name regex")
});

/// Everything one generation run needs to know.
///
/// Built once from CLI arguments and settings, then passed by reference to
/// the generator. There are no setters; the `with_*` methods consume `self`
/// and are only meant for construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    name: String,
    destination: PathBuf,
    project_type: ProjectType,
    vcs_init: bool,
    go_version: String,
    year: i32,
}

impl GenerationConfig {
    /// Create a config for `name` generated under `output_dir`.
    ///
    /// The project is written to `output_dir/name`.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::UserError` if `name` is empty, contains a path
    /// separator, or is otherwise unusable as a directory and module name.
    pub fn new(
        name: impl Into<String>,
        output_dir: impl AsRef<Path>,
        project_type: ProjectType,
    ) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;

        let destination = output_dir.as_ref().join(&name);

        Ok(Self {
            name,
            destination,
            project_type,
            vcs_init: false,
            go_version: DEFAULT_GO_VERSION.to_string(),
            year: chrono::Local::now().year(),
        })
    }

    /// Request version-control initialization after generation.
    pub fn with_vcs_init(mut self, vcs_init: bool) -> Self {
        self.vcs_init = vcs_init;
        self
    }

    /// Override the Go version written to `go.mod`.
    pub fn with_go_version(mut self, go_version: impl Into<String>) -> Self {
        self.go_version = go_version.into();
        self
    }

    /// Override the copyright year written to `LICENSE`.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root directory of the generated project (`<output>/<name>`).
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn vcs_init(&self) -> bool {
        self.vcs_init
    }

    pub fn go_version(&self) -> &str {
        &self.go_version
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Data context for ordinary files and templated paths.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            project_name: &self.name,
            project_type: self.project_type.tag(),
            go_version: &self.go_version,
            year: self.year,
        }
    }
}

/// Check that `name` can be used as both a directory name and a module path.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::UserError(
            "project name must not be empty".to_string(),
        ));
    }

    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::UserError(format!(
            "project name '{}' must be a single directory name, not a path",
            name
        )));
    }

    if !PROJECT_NAME_REGEX.is_match(name) {
        return Err(ScaffoldError::UserError(format!(
            "project name '{}' may only contain letters, digits, '.', '_' and '-', \
             and must start with a letter or digit",
            name
        )));
    }

    Ok(())
}
