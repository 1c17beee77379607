//! Configuration types and defaults for goscaffold.
//!
//! This module defines the project type enumeration, constants, and default
//! value functions used by the Settings struct.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Go toolchain version written into generated `go.mod` files.
pub const DEFAULT_GO_VERSION: &str = "1.21";

/// The fixed set of project layouts goscaffold knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Command-line application built on cobra.
    Cli,
    /// HTTP service with handlers and middleware.
    Web,
    /// gRPC service with graceful shutdown.
    Microservice,
    /// Reusable package with examples and tests.
    Library,
    /// Small tool with hand-rolled flag parsing.
    Tool,
}

impl ProjectType {
    /// Every project type, in registry order.
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Cli,
        ProjectType::Web,
        ProjectType::Microservice,
        ProjectType::Library,
        ProjectType::Tool,
    ];

    /// Tag used on the command line and in render contexts.
    pub fn tag(self) -> &'static str {
        match self {
            ProjectType::Cli => "cli",
            ProjectType::Web => "web",
            ProjectType::Microservice => "microservice",
            ProjectType::Library => "library",
            ProjectType::Tool => "tool",
        }
    }

    /// Human-readable label used in the README and console output.
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Cli => "CLI",
            ProjectType::Web => "Web Service",
            ProjectType::Microservice => "Microservice",
            ProjectType::Library => "Library",
            ProjectType::Tool => "Tool",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ProjectType {
    type Err = ScaffoldError;

    /// Parse a project type tag, ignoring case.
    ///
    /// The short forms `webservice`, `micro` and `lib` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webservice" => Ok(ProjectType::Web),
            "micro" => Ok(ProjectType::Microservice),
            "lib" => Ok(ProjectType::Library),
            tag => ProjectType::ALL
                .into_iter()
                .find(|project_type| project_type.tag() == tag)
                .ok_or_else(|| ScaffoldError::UnknownProjectType(s.to_string())),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_output_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(".")
}
pub(crate) fn default_go_version() -> String {
    DEFAULT_GO_VERSION.to_string()
}
