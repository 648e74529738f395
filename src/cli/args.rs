//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal diagnostic output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Buildmatrix - generate CI build matrices from container image manifests
#[derive(Parser, Debug)]
#[command(name = "bmx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if bmx was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal diagnostic output (machine lines are still emitted)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate build matrices and emit them as CI variables
    #[command(
        name = "matrix",
        long_about = "Generate build matrices and emit them as CI variables.\n\n\
            Reads the image manifest, groups build units by platform \
            (OS, OS version, architecture), partitions each group into \
            independently-buildable clusters along catalog-local FROM \
            references, and writes one setvariable logging-command line \
            per matrix to stdout.\n\n\
            Output is deterministic: an unchanged manifest always \
            produces byte-identical lines in identical order.",
        after_help = "\
EXAMPLES:
    # Emit matrices for ./manifest.json
    bmx matrix

    # Use an explicit manifest and show the human-readable form
    bmx matrix --manifest ci/manifest.json --verbose"
    )]
    Matrix {
        /// Path to the image manifest (default: repo config, then manifest.json)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Also render each matrix as indented text on stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Check that the manifest is consistent
    #[command(
        name = "validate",
        long_about = "Check that the manifest is consistent.\n\n\
            Loads the manifest and resolves every declared FROM \
            reference: external references are ignored, internal ones \
            must be produced by some build unit. Reports a summary on \
            success and the first inconsistency otherwise."
    )]
    Validate {
        /// Path to the image manifest (default: repo config, then manifest.json)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Shell {
    /// The clap_complete generator for this shell.
    pub fn generator(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}
