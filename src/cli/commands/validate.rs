//! validate command - Check manifest consistency

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::catalog::Catalog;
use crate::matrix::{self, emit};
use crate::ui::output;

/// Load the manifest and run full generation without emitting matrices.
///
/// Generation resolves every internal reference, so a clean run proves
/// the manifest is consistent. Reports a summary including the matrix
/// set fingerprint; propagates the first inconsistency as the command
/// failure.
pub fn validate(ctx: &Context, manifest: Option<&Path>) -> Result<()> {
    let path = super::resolve_manifest_path(ctx, manifest);

    let catalog = Catalog::load(&path)
        .with_context(|| format!("failed to load manifest '{}'", path.display()))?;

    let matrices = matrix::generate(&catalog)?;
    for name in matrix::colliding_names(&matrices) {
        output::warn(
            format!("matrix name '{name}' is emitted more than once; later lines overwrite earlier ones"),
            ctx.verbosity,
        );
    }

    let legs: usize = matrices.iter().map(|m| m.legs.len()).sum();
    let fingerprint = emit::fingerprint(&emit::render_lines(&matrices));

    output::print(
        format!(
            "manifest OK: {} repos, {} images, {} build units, {} matrices, {} legs",
            catalog.repo_count(),
            catalog.image_count(),
            catalog.units().len(),
            matrices.len(),
            legs
        ),
        ctx.verbosity,
    );
    output::debug(
        format!("matrix set fingerprint: {}", fingerprint),
        ctx.verbosity,
    );

    Ok(())
}
