//! matrix::emit
//!
//! Serialization of matrices into the CI variable protocol.
//!
//! # Wire format
//!
//! One logging-command line per matrix:
//!
//! ```text
//! ##vso[task.setvariable variable=<Name>;isoutput=true]{ "<Leg>": { "<Var>": "<Val>" }, ... }
//! ```
//!
//! The CI system's logging-command parser is whitespace-sensitive, so
//! the spacing is exact: one space inside each brace pair, `, ` between
//! leg entries and between variable entries. Verbose mode renders the
//! same structure as indented human-readable text for the diagnostic
//! stream; it never replaces the machine lines.

use std::io::{self, Write};

use super::{BuildLeg, BuildMatrix};
use crate::core::types::Fingerprint;

/// Render the logging-command line for one matrix.
pub fn setvariable_line(matrix: &BuildMatrix) -> String {
    let legs = matrix
        .legs
        .iter()
        .map(render_leg)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "##vso[task.setvariable variable={};isoutput=true]{{ {} }}",
        matrix.name, legs
    )
}

fn render_leg(leg: &BuildLeg) -> String {
    let variables = leg
        .variables
        .iter()
        .map(|variable| format!("\"{}\": \"{}\"", variable.name, variable.value))
        .collect::<Vec<_>>()
        .join(", ");

    format!("\"{}\": {{ {} }}", leg.name, variables)
}

/// Render the logging-command lines for a matrix set, in order.
pub fn render_lines(matrices: &[BuildMatrix]) -> Vec<String> {
    matrices.iter().map(setvariable_line).collect()
}

/// Write rendered lines to a stream, one per matrix.
pub fn write_lines<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Render one matrix as indented human-readable text.
pub fn render_verbose(matrix: &BuildMatrix) -> String {
    let mut text = format!("matrix {}\n", matrix.name);
    for leg in &matrix.legs {
        text.push_str(&format!("  leg {}\n", leg.name));
        for variable in &leg.variables {
            text.push_str(&format!("    {}: {}\n", variable.name, variable.value));
        }
    }
    text
}

/// Fingerprint an emitted matrix set.
///
/// Hashes the rendered lines in emission order; identical catalogs
/// produce identical fingerprints.
pub fn fingerprint(lines: &[String]) -> Fingerprint {
    Fingerprint::compute(lines.iter().map(String::as_str))
}
