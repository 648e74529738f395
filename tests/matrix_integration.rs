//! Integration tests for matrix generation.
//!
//! These tests drive the full pipeline over in-memory catalogs:
//! grouping, partitioning, naming, and emission.

use buildmatrix::core::catalog::{Catalog, Image, Manifest, Platform, Repo};
use buildmatrix::core::types::{Architecture, DockerfilePath, ImageRef, Os};
use buildmatrix::matrix::{self, emit, MatrixError};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Builder that assembles a manifest one build unit at a time.
///
/// Each call adds one platform; repositories are created on first use
/// and units keep their insertion order, matching how declaration order
/// flows through the engine.
#[derive(Default)]
struct CatalogBuilder {
    manifest: Manifest,
}

impl CatalogBuilder {
    fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    fn unit(
        mut self,
        repo: &str,
        os: Os,
        os_version: Option<&str>,
        architecture: Architecture,
        dockerfile: &str,
        tags: &[&str],
        from: &[&str],
    ) -> Self {
        let platform = Platform {
            os,
            os_version: os_version.map(String::from),
            architecture,
            dockerfile: DockerfilePath::new(dockerfile).expect("valid dockerfile path"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            from: from
                .iter()
                .map(|f| ImageRef::new(*f).expect("valid image ref"))
                .collect(),
        };

        let image = Image {
            shared_tags: Vec::new(),
            platforms: vec![platform],
        };

        match self.manifest.repos.iter_mut().find(|r| r.name == repo) {
            Some(existing) => existing.images.push(image),
            None => self.manifest.repos.push(Repo {
                name: repo.to_string(),
                images: vec![image],
            }),
        }

        self
    }

    fn build(self) -> Catalog {
        Catalog::from_manifest(&self.manifest).expect("valid manifest")
    }
}

// =============================================================================
// Chained units (Scenario A)
// =============================================================================

#[test]
fn chained_units_merge_into_a_single_graph_leg() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/runtime",
            Os::Linux,
            None,
            Architecture::Amd64,
            "1.0/runtime/linux/amd64/Dockerfile",
            &["1.0"],
            &["ubuntu:bionic"],
        )
        .unit(
            "app/sdk",
            Os::Linux,
            None,
            Architecture::Amd64,
            "1.0/sdk/linux/amd64/Dockerfile",
            &[],
            &["app/runtime:1.0"],
        )
        .build();

    let matrices = matrix::generate(&catalog).unwrap();
    assert_eq!(matrices.len(), 1);

    let m = &matrices[0];
    assert_eq!(m.name, "buildMatrixLinuxAmd64");
    assert_eq!(m.legs.len(), 1);

    let leg = &m.legs[0];
    assert_eq!(leg.name, "1.0-runtime-Dockerfile-graph");
    assert_eq!(leg.variables.len(), 1);
    assert_eq!(leg.variables[0].name, "imageBuilderPaths");
    assert_eq!(
        leg.variables[0].value,
        "--path 1.0/runtime/linux/amd64/Dockerfile --path 1.0/sdk/linux/amd64/Dockerfile"
    );
}

// =============================================================================
// Independent units on another architecture (Scenario B)
// =============================================================================

#[test]
fn other_architectures_get_their_own_matrix() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/runtime",
            Os::Linux,
            None,
            Architecture::Amd64,
            "1.0/runtime/linux/amd64/Dockerfile",
            &["1.0"],
            &[],
        )
        .unit(
            "app/sdk",
            Os::Linux,
            None,
            Architecture::Amd64,
            "1.0/sdk/linux/amd64/Dockerfile",
            &[],
            &["app/runtime:1.0"],
        )
        .unit(
            "app/runtime2",
            Os::Linux,
            None,
            Architecture::Arm64,
            "2.0/runtime/linux/arm64/Dockerfile",
            &[],
            &[],
        )
        .build();

    let matrices = matrix::generate(&catalog).unwrap();
    assert_eq!(matrices.len(), 2);

    // amd64 matrix is unaffected by the arm64 unit
    assert_eq!(matrices[0].name, "buildMatrixLinuxAmd64");
    assert_eq!(matrices[0].legs.len(), 1);
    assert_eq!(matrices[0].legs[0].name, "1.0-runtime-Dockerfile-graph");

    let arm = &matrices[1];
    assert_eq!(arm.name, "buildMatrixLinuxArm64");
    assert_eq!(arm.legs.len(), 1);
    assert_eq!(arm.legs[0].name, "2.0-runtime-Dockerfile");
    assert!(!arm.legs[0].name.ends_with("-graph"));
    assert_eq!(
        arm.legs[0].variables[0].value,
        "--path 2.0/runtime/linux/arm64/Dockerfile"
    );
}

// =============================================================================
// Cross-group dependency edges
// =============================================================================

#[test]
fn dependency_across_platform_keys_never_merges_legs() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/base",
            Os::Linux,
            None,
            Architecture::Amd64,
            "base/Dockerfile",
            &["1.0"],
            &[],
        )
        .unit(
            "app/sdk",
            Os::Linux,
            None,
            Architecture::Arm64,
            "sdk/Dockerfile",
            &[],
            &["app/base:1.0"],
        )
        .build();

    let matrices = matrix::generate(&catalog).unwrap();
    assert_eq!(matrices.len(), 2);
    for m in &matrices {
        assert_eq!(m.legs.len(), 1);
        assert!(!m.legs[0].name.ends_with("-graph"));
    }
}

// =============================================================================
// Group enumeration order
// =============================================================================

#[test]
fn matrices_enumerate_os_then_version_descending_then_architecture() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/a",
            Os::Windows,
            Some("nanoserver-1809"),
            Architecture::Amd64,
            "w1809/Dockerfile",
            &[],
            &[],
        )
        .unit(
            "app/b",
            Os::Linux,
            None,
            Architecture::Arm64,
            "larm64/Dockerfile",
            &[],
            &[],
        )
        .unit(
            "app/c",
            Os::Windows,
            Some("nanoserver-ltsc2022"),
            Architecture::Amd64,
            "w2022/Dockerfile",
            &[],
            &[],
        )
        .unit(
            "app/d",
            Os::Linux,
            None,
            Architecture::Amd64,
            "lamd64/Dockerfile",
            &[],
            &[],
        )
        .build();

    let names: Vec<String> = matrix::generate(&catalog)
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();

    assert_eq!(
        names,
        vec![
            "buildMatrixLinuxAmd64",
            "buildMatrixLinuxArm64",
            "buildMatrixNanoserverLtsc2022Amd64",
            "buildMatrixNanoserver1809Amd64",
        ]
    );
}

// =============================================================================
// Emission format (Scenario D)
// =============================================================================

#[test]
fn emitted_line_matches_the_logging_command_grammar_exactly() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/runtime-deps",
            Os::Linux,
            None,
            Architecture::Amd64,
            "1.0/runtime-deps/bionic/amd64/Dockerfile",
            &[],
            &[],
        )
        .build();

    let matrices = matrix::generate(&catalog).unwrap();
    let lines = emit::render_lines(&matrices);
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        "##vso[task.setvariable variable=buildMatrixLinuxAmd64;isoutput=true]\
         { \"1.0-runtime-deps-bionic-Dockerfile\": { \"imageBuilderPaths\": \
         \"--path 1.0/runtime-deps/bionic/amd64/Dockerfile\" } }"
    );
}

#[test]
fn multi_leg_matrices_separate_legs_with_comma_space() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/a",
            Os::Linux,
            None,
            Architecture::Amd64,
            "a/Dockerfile",
            &[],
            &[],
        )
        .unit(
            "app/b",
            Os::Linux,
            None,
            Architecture::Amd64,
            "b/Dockerfile",
            &[],
            &[],
        )
        .build();

    let matrices = matrix::generate(&catalog).unwrap();
    let line = emit::setvariable_line(&matrices[0]);
    assert_eq!(
        line,
        "##vso[task.setvariable variable=buildMatrixLinuxAmd64;isoutput=true]\
         { \"a-Dockerfile\": { \"imageBuilderPaths\": \"--path a/Dockerfile\" }, \
         \"b-Dockerfile\": { \"imageBuilderPaths\": \"--path b/Dockerfile\" } }"
    );
}

// =============================================================================
// Inconsistency handling
// =============================================================================

#[test]
fn dangling_internal_reference_aborts_with_no_matrices() {
    let catalog = CatalogBuilder::new()
        .unit(
            "app/good",
            Os::Linux,
            None,
            Architecture::Amd64,
            "good/Dockerfile",
            &[],
            &[],
        )
        .unit(
            "app/bad",
            Os::Linux,
            None,
            Architecture::Amd64,
            "bad/Dockerfile",
            &[],
            &["app/good:missing"],
        )
        .build();

    let err = matrix::generate(&catalog).unwrap_err();
    let MatrixError::ManifestInconsistency {
        reference,
        dockerfile,
    } = err;
    assert_eq!(reference.as_str(), "app/good:missing");
    assert_eq!(dockerfile.as_str(), "bad/Dockerfile");
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn identical_catalogs_emit_byte_identical_lines() {
    let build = || {
        CatalogBuilder::new()
            .unit(
                "app/runtime",
                Os::Linux,
                None,
                Architecture::Amd64,
                "1.0/runtime/linux/amd64/Dockerfile",
                &["1.0"],
                &[],
            )
            .unit(
                "app/sdk",
                Os::Linux,
                None,
                Architecture::Amd64,
                "1.0/sdk/linux/amd64/Dockerfile",
                &[],
                &["app/runtime:1.0"],
            )
            .unit(
                "app/win",
                Os::Windows,
                Some("nanoserver-1809"),
                Architecture::Amd64,
                "1.0/win/nanoserver-1809/amd64/Dockerfile",
                &[],
                &[],
            )
            .build()
    };

    let first = emit::render_lines(&matrix::generate(&build()).unwrap());
    let second = emit::render_lines(&matrix::generate(&build()).unwrap());
    assert_eq!(first, second);
    assert_eq!(emit::fingerprint(&first), emit::fingerprint(&second));
}
