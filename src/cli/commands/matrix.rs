//! matrix command - Generate and emit CI build matrices

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::catalog::Catalog;
use crate::matrix::{self, emit};
use crate::ui::output;

/// Generate the matrix set and emit one setvariable line per matrix.
///
/// Machine lines go to stdout unconditionally; verbose rendering and
/// diagnostics go to stderr. Nothing is written if generation fails.
pub fn matrix(ctx: &Context, manifest: Option<&Path>, verbose: bool) -> Result<()> {
    let path = super::resolve_manifest_path(ctx, manifest);
    output::debug(
        format!("loading manifest from {}", path.display()),
        ctx.verbosity,
    );

    let catalog = Catalog::load(&path)
        .with_context(|| format!("failed to load manifest '{}'", path.display()))?;

    let matrices = matrix::generate(&catalog)?;
    for name in matrix::colliding_names(&matrices) {
        output::warn(
            format!("matrix name '{name}' is emitted more than once; later lines overwrite earlier ones"),
            ctx.verbosity,
        );
    }

    let lines = emit::render_lines(&matrices);

    if verbose || ctx.config.verbose() {
        for m in &matrices {
            eprint!("{}", emit::render_verbose(m));
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit::write_lines(&lines, &mut out)?;
    out.flush()?;

    output::debug(
        format!(
            "{} matrices, fingerprint {}",
            matrices.len(),
            emit::fingerprint(&lines).short()
        ),
        ctx.verbosity,
    );

    Ok(())
}
