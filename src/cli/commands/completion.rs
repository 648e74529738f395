//! completion command - Emit shell completion scripts
//!
//! The script goes to stdout so it can be piped straight into the
//! shell's completion directory; diagnostics never mix into it.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::args::{Cli, Shell};

/// Emit the completion script for `shell` on stdout.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell.generator(), &mut cmd, &name, &mut std::io::stdout());
    Ok(())
}
