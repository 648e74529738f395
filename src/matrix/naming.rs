//! matrix::naming
//!
//! Matrix and leg name derivation.
//!
//! Two pure string transforms. Matrix names flatten their parts into a
//! single camel-cased identifier; leg names come from the subgraph's
//! first Dockerfile path with the platform segments stripped.

/// Derive a matrix name from its parts.
///
/// Every part is split on `-` into words (order preserved), then the
/// words are camel-case joined: the first word is kept as-is, every
/// subsequent word has its first character capitalized, and the words
/// are concatenated without separators.
///
/// # Example
///
/// ```
/// use buildmatrix::matrix::naming::format_matrix_name;
///
/// assert_eq!(
///     format_matrix_name(&["buildMatrix", "bionic", "arm64"]),
///     "buildMatrixBionicArm64"
/// );
/// assert_eq!(
///     format_matrix_name(&["buildMatrix", "nanoserver-1809", "amd64"]),
///     "buildMatrixNanoserver1809Amd64"
/// );
/// ```
pub fn format_matrix_name(parts: &[&str]) -> String {
    let mut name = String::new();

    for word in parts.iter().flat_map(|part| part.split('-')) {
        if word.is_empty() {
            continue;
        }

        if name.is_empty() {
            name.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }

    name
}

/// Derive a leg name from a subgraph's Dockerfile paths.
///
/// The first path (stable order) is split on `/`; segments that
/// case-insensitively equal one of the *un-split* matrix name parts are
/// dropped, and the rest are joined with `-`. Subgraphs with more than
/// one member get a `-graph` suffix so CI log readers can tell a
/// locally-chained group from a single image.
///
/// Note that a compound part (one containing `-`, e.g.
/// `nanoserver-1809`) can never equal a single path segment and is
/// therefore never stripped.
///
/// # Example
///
/// ```
/// use buildmatrix::matrix::naming::format_leg_name;
///
/// let parts = ["buildMatrix", "bionic", "arm64"];
/// assert_eq!(
///     format_leg_name(&["1.0/runtime-deps/bionic/arm64/Dockerfile"], &parts),
///     "1.0-runtime-deps-Dockerfile"
/// );
/// ```
pub fn format_leg_name(dockerfile_paths: &[&str], matrix_name_parts: &[&str]) -> String {
    let first = dockerfile_paths.first().copied().unwrap_or_default();

    let mut name = first
        .split('/')
        .filter(|segment| {
            !matrix_name_parts
                .iter()
                .any(|part| part.eq_ignore_ascii_case(segment))
        })
        .collect::<Vec<_>>()
        .join("-");

    if dockerfile_paths.len() > 1 {
        name.push_str("-graph");
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    mod matrix_name {
        use super::*;

        #[test]
        fn camel_joins_simple_parts() {
            assert_eq!(
                format_matrix_name(&["buildMatrix", "linux", "amd64"]),
                "buildMatrixLinuxAmd64"
            );
        }

        #[test]
        fn splits_compound_parts_on_dash() {
            assert_eq!(
                format_matrix_name(&["buildMatrix", "windowsservercore-ltsc2019", "amd64"]),
                "buildMatrixWindowsservercoreLtsc2019Amd64"
            );
        }

        #[test]
        fn first_word_keeps_its_case() {
            assert_eq!(format_matrix_name(&["buildMatrix"]), "buildMatrix");
        }

        #[test]
        fn empty_words_are_dropped() {
            assert_eq!(format_matrix_name(&["a--b", "c"]), "aBC");
        }
    }

    mod leg_name {
        use super::*;

        const PARTS: [&str; 3] = ["buildMatrix", "bionic", "arm64"];

        #[test]
        fn strips_matching_segments_case_insensitively() {
            assert_eq!(
                format_leg_name(&["1.0/runtime-deps/Bionic/ARM64/Dockerfile"], &PARTS),
                "1.0-runtime-deps-Dockerfile"
            );
        }

        #[test]
        fn compound_parts_never_match_a_segment() {
            let parts = ["buildMatrix", "nanoserver-1809", "amd64"];
            assert_eq!(
                format_leg_name(&["1.0/runtime/nanoserver-1809/amd64/Dockerfile"], &parts),
                "1.0-runtime-nanoserver-1809-Dockerfile"
            );
        }

        #[test]
        fn uses_only_the_first_path() {
            assert_eq!(
                format_leg_name(
                    &["1.0/runtime/bionic/arm64/Dockerfile", "other/Dockerfile"],
                    &PARTS
                ),
                "1.0-runtime-Dockerfile-graph"
            );
        }

        #[test]
        fn multi_member_subgraphs_get_graph_suffix() {
            assert_eq!(
                format_leg_name(&["a/Dockerfile", "b/Dockerfile"], &PARTS),
                "a-Dockerfile-graph"
            );
            assert_eq!(format_leg_name(&["a/Dockerfile"], &PARTS), "a-Dockerfile");
        }
    }
}
