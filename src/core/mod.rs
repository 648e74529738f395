//! core
//!
//! Core domain types, catalog model, and configuration for Buildmatrix.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Os, Architecture, ImageRef, DockerfilePath, etc.
//! - [`catalog`] - Manifest schema and the loaded catalog with its ref index
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Everything derived from the catalog is deterministic

pub mod catalog;
pub mod config;
pub mod types;
