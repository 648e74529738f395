//! matrix
//!
//! The build-matrix generation engine.
//!
//! # Pipeline
//!
//! Generation is a one-way pipeline over a loaded catalog:
//!
//! 1. [`grouping`] - bucket every build unit by platform key
//! 2. [`subgraph`] - partition each group into locally-connected clusters
//! 3. [`naming`] - derive matrix and leg names
//! 4. [`emit`] - serialize matrices into the CI variable protocol
//!
//! # Invariants
//!
//! - The engine performs no I/O and holds no mutable state
//! - An unchanged catalog produces an identical matrix set
//! - Generation is all-or-nothing: a manifest inconsistency returns
//!   `Err` before anything can be emitted
//! - Units whose Dockerfiles chain through catalog-local `FROM`
//!   references on the same platform always share a leg; independent
//!   units get independent legs

pub mod emit;
pub mod grouping;
pub mod naming;
pub mod resolver;
pub mod subgraph;

use std::collections::HashSet;

use thiserror::Error;

use crate::core::catalog::Catalog;
use crate::core::types::{DockerfilePath, ImageRef};

/// First part of every matrix name.
pub const MATRIX_NAME_ROOT: &str = "buildMatrix";

/// Name of the single variable carried by every leg.
pub const PATHS_VARIABLE: &str = "imageBuilderPaths";

/// Errors from matrix generation.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// An internal reference has no producing build unit.
    ///
    /// The reference's repository belongs to the catalog, so the
    /// reference should resolve; that it does not means the manifest
    /// contradicts itself. Fatal: no partial matrix set is emitted.
    #[error(
        "manifest inconsistency: '{reference}' declared by '{dockerfile}' \
         is not produced by any build unit in the catalog"
    )]
    ManifestInconsistency {
        reference: ImageRef,
        dockerfile: DockerfilePath,
    },
}

/// One named variable on a leg. Insertion order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegVariable {
    pub name: String,
    pub value: String,
}

/// One schedulable unit of work within a matrix, covering one or more
/// locally-chained build units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLeg {
    pub name: String,
    pub variables: Vec<LegVariable>,
}

/// A named grouping of build legs for one platform key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMatrix {
    pub name: String,
    pub legs: Vec<BuildLeg>,
}

/// Generate the full matrix set for a catalog.
///
/// One matrix per platform group, one leg per locally-connected
/// subgraph, with the leg's `imageBuilderPaths` variable listing a
/// `--path <dockerfile>` token for every member in stable order.
///
/// # Errors
///
/// Returns [`MatrixError::ManifestInconsistency`] when any unit declares
/// an internal reference no unit produces. Nothing is emitted in that
/// case.
///
/// # Example
///
/// ```
/// use buildmatrix::core::catalog::Catalog;
/// use buildmatrix::matrix;
///
/// let catalog = Catalog::from_json(r#"
/// {
///   "repos": [
///     { "name": "app/runtime",
///       "images": [
///         { "platforms": [
///             { "os": "linux", "architecture": "amd64",
///               "dockerfile": "1.0/runtime/linux/amd64/Dockerfile" } ] } ] }
///   ]
/// }
/// "#).unwrap();
///
/// let matrices = matrix::generate(&catalog).unwrap();
/// assert_eq!(matrices.len(), 1);
/// assert_eq!(matrices[0].name, "buildMatrixLinuxAmd64");
/// ```
pub fn generate(catalog: &Catalog) -> Result<Vec<BuildMatrix>, MatrixError> {
    let groups = grouping::group_by_platform(catalog);
    let mut matrices = Vec::with_capacity(groups.len());

    for (key, members) in &groups {
        let parts = [
            MATRIX_NAME_ROOT,
            key.os_qualifier(),
            key.architecture.display_name(),
        ];
        let name = naming::format_matrix_name(&parts);

        let mut legs = Vec::new();
        for cluster in subgraph::partition(catalog, members)? {
            let paths: Vec<&str> = cluster
                .iter()
                .map(|&id| catalog.unit(id).dockerfile.as_str())
                .collect();

            let value = paths
                .iter()
                .map(|path| format!("--path {path}"))
                .collect::<Vec<_>>()
                .join(" ");

            legs.push(BuildLeg {
                name: naming::format_leg_name(&paths, &parts),
                variables: vec![LegVariable {
                    name: PATHS_VARIABLE.to_string(),
                    value,
                }],
            });
        }

        matrices.push(BuildMatrix { name, legs });
    }

    Ok(matrices)
}

/// Matrix names appearing more than once in a set, in emission order.
///
/// Linux groups that differ only by OS version share an OS qualifier,
/// so their matrices collide on one name and later setvariable lines
/// overwrite earlier ones in CI. The collision is not an error (the
/// names are part of the external contract), but callers should warn.
pub fn colliding_names(matrices: &[BuildMatrix]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut collisions = Vec::new();

    for matrix in matrices {
        let name = matrix.name.as_str();
        if !seen.insert(name) && !collisions.contains(&name) {
            collisions.push(name);
        }
    }

    collisions
}
