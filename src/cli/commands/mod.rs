//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves command-specific arguments (manifest path via flag,
//!    repo config, then the default)
//! 2. Loads the catalog and calls the engine
//! 3. Formats and displays output
//!
//! Handlers never emit a partial matrix set: the engine returns the
//! whole set or an error, and emission happens only afterwards.

mod completion;
mod matrix;
mod validate;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use matrix::matrix;
pub use validate::validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Matrix { manifest, verbose } => matrix(ctx, manifest.as_deref(), verbose),
        Command::Validate { manifest } => validate(ctx, manifest.as_deref()),
        Command::Completion { shell } => completion(shell),
    }
}

/// Default manifest filename when neither the flag nor config names one.
pub const DEFAULT_MANIFEST: &str = "manifest.json";

/// Resolve the manifest path: explicit flag, then repo config, then the
/// default, all relative to the context's working directory.
pub(crate) fn resolve_manifest_path(ctx: &Context, flag: Option<&Path>) -> PathBuf {
    let relative = match flag {
        Some(path) => path.to_path_buf(),
        None => match ctx.config.manifest() {
            Some(configured) => PathBuf::from(configured),
            None => PathBuf::from(DEFAULT_MANIFEST),
        },
    };

    if relative.is_absolute() {
        relative
    } else {
        ctx.cwd.join(relative)
    }
}
