//! matrix::resolver
//!
//! One-hop dependency resolution over the catalog.
//!
//! A build unit depends on another when one of its declared `FROM`
//! references is produced by that unit. External references (public
//! base images) are skipped; internal references must resolve or the
//! manifest is inconsistent and generation aborts.

use crate::core::catalog::{Catalog, UnitId};

use super::MatrixError;

/// Resolve the direct (one-hop) catalog-local dependencies of a unit.
///
/// Returns dependencies in declared `FROM` order, de-duplicated. Never
/// recurses: transitive chains fall out of the subgraph partitioning,
/// not the resolver.
///
/// # Errors
///
/// Returns [`MatrixError::ManifestInconsistency`] when a reference is
/// not external yet no unit produces it.
pub fn direct_dependencies(catalog: &Catalog, id: UnitId) -> Result<Vec<UnitId>, MatrixError> {
    let unit = catalog.unit(id);
    let mut dependencies = Vec::new();

    for reference in &unit.from {
        if catalog.is_external(reference) {
            continue;
        }

        match catalog.resolve(reference) {
            Some(dependency) => {
                if !dependencies.contains(&dependency) {
                    dependencies.push(dependency);
                }
            }
            None => {
                return Err(MatrixError::ManifestInconsistency {
                    reference: reference.clone(),
                    dockerfile: unit.dockerfile.clone(),
                })
            }
        }
    }

    Ok(dependencies)
}
