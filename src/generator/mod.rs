//! Project generation.
//!
//! [`generate`] materializes a blueprint under the configured destination:
//!
//! 1. Resolve the blueprint for the project type
//! 2. Create every directory entry, in order
//! 3. Render and write every file entry, in order
//! 4. Run post steps (best-effort)
//!
//! Generation is sequential and stops at the first directory, template, or
//! file error. Nothing is rolled back: directories and files written before
//! the failure stay on disk, since the destination is expected to be fresh
//! and re-runnable.


use crate::blueprint::{self, Blueprint, ContextKind, FileEntry, PostStep};
use crate::config::{GenerationConfig, ManifestContext, ReadmeContext, RenderContext};
use crate::error::Result;
use crate::fs::{ensure_dir, make_executable, write_file};
use crate::template;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a successful generation run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Project root (`<output>/<name>`).
    pub root: PathBuf,
    /// Directories created, in blueprint order.
    pub directories: Vec<PathBuf>,
    /// Files written, in blueprint order.
    pub files: Vec<PathBuf>,
    /// Non-fatal post-step failures.
    pub warnings: Vec<String>,
}

/// Generate the project described by `config`.
///
/// # Returns
///
/// * `Ok(GenerationReport)` - Every directory and file was materialized
/// * `Err(ScaffoldError::TemplateSyntax | TemplateExecution)` - A blueprint
///   path or body could not be rendered
/// * `Err(ScaffoldError::Filesystem)` - A directory or file could not be created
pub fn generate(config: &GenerationConfig) -> Result<GenerationReport> {
    let blueprint = blueprint::resolve(config.project_type());
    generate_from(config, blueprint)
}

/// Materialize `blueprint` for `config`.
pub(crate) fn generate_from(
    config: &GenerationConfig,
    blueprint: &Blueprint,
) -> Result<GenerationReport> {
    let root = config.destination();
    let context = config.render_context();

    info!(
        project = config.name(),
        project_type = %blueprint.project_type,
        root = %root.display(),
        "generating project"
    );

    let mut report = GenerationReport {
        root: root.to_path_buf(),
        ..GenerationReport::default()
    };

    ensure_dir(root)?;

    for entry in blueprint.directories {
        let path = root.join(render_path(entry, &context)?);
        ensure_dir(&path)?;
        debug!(path = %path.display(), "created directory");
        report.directories.push(path);
    }

    for file in blueprint.files {
        let relative = render_path(file.path, &context)?;
        let content = render_file(config, blueprint, file, &relative, &context)?;
        let path = root.join(&relative);
        write_file(&path, &content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        report.files.push(path);
    }

    for step in blueprint.post_steps {
        if let Err(err) = run_post_step(root, step, &context) {
            warn!("{}", err);
            report.warnings.push(err.to_string());
        }
    }

    info!(
        directories = report.directories.len(),
        files = report.files.len(),
        "project generated"
    );

    Ok(report)
}

fn render_path(path: &str, context: &RenderContext<'_>) -> Result<String> {
    template::render(path, path, context)
}

fn render_file(
    config: &GenerationConfig,
    blueprint: &Blueprint,
    file: &FileEntry,
    relative: &str,
    context: &RenderContext<'_>,
) -> Result<String> {
    match file.context {
        ContextKind::Project => template::render(relative, file.body, context),
        ContextKind::Readme => template::render(relative, file.body, &ReadmeContext::new(config)),
        ContextKind::Manifest => template::render(
            relative,
            file.body,
            &ManifestContext::new(config, blueprint.dependencies),
        ),
    }
}

fn run_post_step(root: &Path, step: &PostStep, context: &RenderContext<'_>) -> Result<()> {
    match step {
        PostStep::MakeExecutable(path) => {
            let target = root.join(render_path(path, context)?);
            make_executable(&target)?;
            debug!(path = %target.display(), "marked executable");
            Ok(())
        }
    }
}
