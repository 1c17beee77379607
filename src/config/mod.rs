//! Configuration for goscaffold.
//!
//! Two layers live here:
//!
//! - [`Settings`]: optional user defaults loaded from a YAML file (`--config`).
//!   Unknown fields are ignored and missing fields fall back to defaults.
//! - [`GenerationConfig`]: the immutable description of one generation run,
//!   built from CLI arguments layered over `Settings`.
//!
//! The render contexts handed to the template engine are derived from
//! `GenerationConfig` in the `context` submodule.

mod context;
mod generation;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use context::{ManifestContext, ReadmeContext, RenderContext};
pub use generation::GenerationConfig;
pub use model::Settings;
pub use types::ProjectType;
