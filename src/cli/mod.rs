//! cli
//!
//! Command-line interface layer for Buildmatrix.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build the command context
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches
//! to handlers that drive the [`crate::matrix`] engine. The engine
//! itself performs no I/O; everything it needs arrives through the
//! loaded catalog.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Shared context for command handlers.
#[derive(Debug)]
pub struct Context {
    /// Working directory all relative paths resolve against.
    pub cwd: PathBuf,
    /// Diagnostic verbosity.
    pub verbosity: Verbosity,
    /// Merged configuration.
    pub config: Config,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let cwd = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine working directory")?,
    };

    let config = Config::load(&cwd)?;

    // CLI flags take precedence over configured defaults.
    let quiet = cli.quiet || (!cli.debug && config.quiet());
    let ctx = Context {
        cwd,
        verbosity: Verbosity::from_flags(quiet, cli.debug),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}
