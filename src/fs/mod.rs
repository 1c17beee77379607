//! Filesystem utilities for goscaffold.
//!
//! Directory provisioning and file materialization for generated projects.
//! Writes are plain create-and-truncate: an existing file is overwritten and
//! the last write wins.

mod materialize;
mod provision;

pub use materialize::{make_executable, write_file};
pub use provision::ensure_dir;
