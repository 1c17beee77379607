//! Command implementations for goscaffold.
//!
//! This module provides the dispatcher that routes CLI commands to the
//! generator. Every project subcommand follows the same flow:
//!
//! 1. Load settings (`--config`) and layer the CLI flags over them
//! 2. Build a [`GenerationConfig`] for `<output>/<name>`
//! 3. Generate the project
//! 4. Optionally initialize a git repository (best-effort)
//! 5. Print the success banner and next steps

mod display;


use crate::blueprint;
use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{GenerationConfig, ProjectType, Settings};
use crate::error::{Result, ScaffoldError};
use crate::generator;
use crate::git;
use tracing::{info, warn};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;

    let (project_type, name) = match command {
        Command::Cli(args) => (ProjectType::Cli, args.name),
        Command::Web(args) => (ProjectType::Web, args.name),
        Command::Microservice(args) => (ProjectType::Microservice, args.name),
        Command::Library(args) => (ProjectType::Library, args.name),
        Command::Tool(args) => (ProjectType::Tool, args.name),
        Command::External(args) => resolve_external(args)?,
    };

    cmd_generate(&global, project_type, &name)
}

/// Resolve a subcommand clap did not recognize.
///
/// A type tag in unexpected casing (`Cli`, `LiBrArY`) still resolves.
/// Anything else is an unknown project type and nothing is created.
fn resolve_external(args: Vec<String>) -> Result<(ProjectType, String)> {
    let mut args = args.into_iter();
    let tag = args.next().unwrap_or_default();
    let project_type = blueprint::resolve_tag(&tag)?.project_type;

    match (args.next(), args.next()) {
        (Some(name), None) => Ok((project_type, name)),
        _ => Err(ScaffoldError::UserError(format!(
            "'{}' requires exactly one argument: the project name",
            project_type
        ))),
    }
}

fn cmd_generate(global: &GlobalArgs, project_type: ProjectType, name: &str) -> Result<()> {
    let settings = Settings::load_or_default(global.config.as_deref())?;
    let output_dir = global
        .output
        .clone()
        .unwrap_or_else(|| settings.output_dir.clone());

    let config = GenerationConfig::new(name, &output_dir, project_type)?
        .with_vcs_init(global.git || settings.git)
        .with_go_version(settings.go_version.clone());

    if global.verbose {
        display::print_start(&config);
    }

    let report = generator::generate(&config)?;

    if global.verbose {
        display::print_report(&report);
    }

    display::print_success(&config);

    if config.vcs_init() {
        if global.verbose {
            println!("Initializing git repository...");
        }
        match git::init_repository(config.destination()) {
            Ok(()) => {
                info!(path = %config.destination().display(), "git repository initialized");
                println!("Git repository initialized with initial commit");
            }
            Err(err) => warn!("Failed to initialize git repository: {}", err),
        }
    }

    display::print_next_steps(config.name());
    Ok(())
}
