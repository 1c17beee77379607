//! Project blueprint registry.
//!
//! A [`Blueprint`] is the static description of one project layout: the
//! directories to create, the templated files to write (in order), the
//! dependencies declared in `go.mod`, and auxiliary post steps such as
//! marking a script executable.
//!
//! Blueprints are plain data. The sequencing logic lives once in the
//! generator; adding a project type means adding a table in `catalog`, not a
//! new code path.
//!
//! Directory and file paths are templates rendered with the project's
//! render context, so `pkg/{{.ProjectName}}` expands per project. Files do not
//! depend on their parent appearing in `directories`: the materializer creates
//! missing parents itself.

mod catalog;


use crate::config::ProjectType;

/// Which render context a file is rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// The full per-run context (`ProjectName`, `ProjectType`, `GoVersion`, `Year`).
    Project,
    /// The narrow README view (`ProjectName` and the display label as `ProjectType`).
    Readme,
    /// The `go.mod` view (`ProjectName`, `GoVersion`, `Requires`).
    Manifest,
}

/// One templated file in a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the project root; may contain template fields.
    pub path: &'static str,
    /// Template body.
    pub body: &'static str,
    pub context: ContextKind,
}

/// A module requirement written to `go.mod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub module: &'static str,
    pub version: &'static str,
}

/// An auxiliary action run after every file has been written.
///
/// Post steps are best-effort: a failure is reported as a warning and never
/// aborts an otherwise successful generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStep {
    /// Set mode 0755 on the file at this (templated) relative path.
    MakeExecutable(&'static str),
}

/// Static description of one project layout.
#[derive(Debug)]
pub struct Blueprint {
    pub project_type: ProjectType,
    /// Directories to create, relative to the project root, in order.
    pub directories: &'static [&'static str],
    /// Files to render and write, in order.
    pub files: &'static [FileEntry],
    /// Requirements for the `go.mod` manifest.
    pub dependencies: &'static [Dependency],
    pub post_steps: &'static [PostStep],
}

/// Look up the blueprint registered for `project_type`.
pub fn resolve(project_type: ProjectType) -> &'static Blueprint {
    match project_type {
        ProjectType::Cli => &catalog::CLI,
        ProjectType::Web => &catalog::WEB,
        ProjectType::Microservice => &catalog::MICROSERVICE,
        ProjectType::Library => &catalog::LIBRARY,
        ProjectType::Tool => &catalog::TOOL,
    }
}

/// Look up a blueprint by its type tag (`cli`, `web`, ...).
///
/// # Errors
///
/// Returns `ScaffoldError::UnknownProjectType` for any other tag.
pub fn resolve_tag(tag: &str) -> crate::error::Result<&'static Blueprint> {
    Ok(resolve(tag.parse::<ProjectType>()?))
}
