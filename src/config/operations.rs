//! Settings loading and validation.

use super::model::Settings;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(ScaffoldError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load settings from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = serde_yaml::from_str(yaml).map_err(|e| {
            ScaffoldError::UserError(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - `go_version` must be non-empty and look like `<major>.<minor>[.<patch>]`
    /// - `output_dir` must be non-empty
    pub fn validate(&self) -> Result<()> {
        let go_version = self.go_version.trim();
        if go_version.is_empty() {
            return Err(ScaffoldError::UserError(
                "settings validation failed: go_version must not be empty".to_string(),
            ));
        }

        let parts: Vec<&str> = go_version.split('.').collect();
        let numeric = parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !(2..=3).contains(&parts.len()) || !numeric {
            return Err(ScaffoldError::UserError(format!(
                "settings validation failed: go_version '{}' is not a Go version like '1.21'",
                self.go_version
            )));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ScaffoldError::UserError(
                "settings validation failed: output_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
