//! Buildmatrix - A CLI for generating CI build matrices from container
//! image manifests
//!
//! Buildmatrix reads a declarative manifest describing a catalog of
//! container images (repositories, images, and the per-platform
//! Dockerfiles that build them) and computes the build matrices a CI
//! system should schedule: one matrix per platform, one leg per set of
//! locally-chained Dockerfiles.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the engine)
//! - [`matrix`] - The generation engine: grouping, partitioning, naming, emission
//! - [`core`] - Domain types, catalog model, and configuration
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Buildmatrix maintains the following invariants:
//!
//! 1. Generation is pure: the engine performs no I/O and holds no state
//! 2. An unchanged catalog produces byte-identical output
//! 3. A manifest inconsistency aborts the run before anything is emitted
//! 4. Every build unit lands in exactly one leg of exactly one matrix

pub mod cli;
pub mod core;
pub mod matrix;
pub mod ui;
