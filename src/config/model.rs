//! Settings struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User defaults for goscaffold.
///
/// Loaded from the YAML file passed with `--config`. Command-line flags take
/// precedence over every value here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory new projects are created under (default: ".").
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to initialize a git repository after generation.
    #[serde(default)]
    pub git: bool,

    /// Go version written to the `go` directive of `go.mod`.
    #[serde(default = "default_go_version")]
    pub go_version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            git: false,
            go_version: default_go_version(),
        }
    }
}
