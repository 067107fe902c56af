//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ExpandCommand, ResolveCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for resolving candidate files against the filesystem.
#[derive(Parser)]
#[command(name = "scout")]
#[command(
    version,
    about = "Resolve candidate file names and search paths to existing files",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a term list and print the files that exist
    Resolve(ResolveCommand),

    /// Print the expanded candidate list without touching the filesystem
    Expand(ExpandCommand),
}
