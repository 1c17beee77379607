//! CLI argument parsing for goscaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Goscaffold: generate Go project structures quickly.
///
/// Each subcommand creates `<output>/<project-name>` with a ready-to-build
/// layout: directories, a go.mod, a README and starter sources.
#[derive(Parser, Debug)]
#[command(name = "goscaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Output directory for the project (default: ".").
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Initialize a git repository with an initial commit.
    #[arg(short, long, global = true)]
    pub git: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML settings file with defaults for output directory, git and Go version.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands for goscaffold.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a CLI application.
    ///
    /// Creates a cobra-based command-line application with a root command
    /// and one example command.
    #[command(alias = "CLI", alias = "Cli")]
    Cli(ProjectArgs),

    /// Generate a web service.
    ///
    /// Creates an HTTP service with handlers, logging and CORS middleware,
    /// and a YAML configuration file.
    #[command(alias = "Web", alias = "WEB", alias = "webservice")]
    Web(ProjectArgs),

    /// Generate a microservice.
    ///
    /// Creates a gRPC service with graceful shutdown, a proto definition
    /// and a code-generation script.
    #[command(alias = "Microservice", alias = "MICROSERVICE", alias = "micro")]
    Microservice(ProjectArgs),

    /// Generate a Go library.
    ///
    /// Creates a package with an example program, table-driven tests
    /// and an MIT license.
    #[command(alias = "LIB", alias = "lib", alias = "Library", alias = "LIBRARY")]
    Library(ProjectArgs),

    /// Generate a small tool.
    ///
    /// Creates a flag-based tool with `process` and `analyze` commands.
    #[command(alias = "TOOL", alias = "Tool")]
    Tool(ProjectArgs),

    /// Any other project type name.
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Arguments shared by every project subcommand.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Name of the project; also the directory and Go module name.
    pub name: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
