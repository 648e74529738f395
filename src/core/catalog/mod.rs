//! core::catalog
//!
//! The loaded image catalog and its reference index.
//!
//! # Overview
//!
//! A [`Catalog`] is built from a [`Manifest`] (see [`schema`]). Loading
//! flattens every platform of every image of every repository into one
//! stable sequence of [`BuildUnit`]s and indexes the tags each unit
//! produces, so that base-image references can be classified and
//! resolved:
//!
//! - [`Catalog::is_external`] - true when a reference points outside the
//!   catalog (its repository is not a catalog repository)
//! - [`Catalog::resolve`] - maps an internal reference to the unit that
//!   produces it
//!
//! # Determinism
//!
//! The flattened unit order is the manifest declaration order
//! (repository, then image, then platform) and is the stable order every
//! downstream computation preserves.

pub mod schema;

pub use schema::{Image, Manifest, Platform, Repo};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{DockerfilePath, ImageRef, PlatformKey, TypeError};

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest: {0}")]
    ParseError(String),

    #[error("invalid produced tag in repository '{repo}': {source}")]
    InvalidTag { repo: String, source: TypeError },

    #[error("duplicate produced reference '{reference}': declared by both '{first}' and '{second}'")]
    DuplicateTag {
        reference: ImageRef,
        first: DockerfilePath,
        second: DockerfilePath,
    },
}

/// Identifier of a build unit within its catalog.
///
/// Ids index the catalog's stable flattened unit order and are only
/// meaningful for the catalog that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(usize);

impl UnitId {
    /// Position of the unit in the catalog's stable order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// One platform-specific Dockerfile to be built, flattened out of the
/// manifest with its owning repository recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildUnit {
    /// Name of the repository that owns this unit.
    pub repository: String,

    /// The platform grouping key.
    pub key: PlatformKey,

    /// Catalog-relative Dockerfile path.
    pub dockerfile: DockerfilePath,

    /// Fully-qualified references this unit produces.
    pub produces: Vec<ImageRef>,

    /// Base-image references the Dockerfile declares.
    pub from: Vec<ImageRef>,
}

/// A loaded, indexed image catalog.
#[derive(Debug)]
pub struct Catalog {
    units: Vec<BuildUnit>,
    repositories: HashSet<String>,
    tag_index: HashMap<ImageRef, UnitId>,
    repo_count: usize,
    image_count: usize,
}

impl Catalog {
    /// Load a catalog from a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, the JSON does
    /// not match the schema, or the manifest declares duplicate
    /// produced references.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a catalog from manifest JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_manifest(&manifest)
    }

    /// Build a catalog from an already-parsed manifest.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, CatalogError> {
        let mut units: Vec<BuildUnit> = Vec::new();
        let mut repositories = HashSet::new();
        let mut tag_index: HashMap<ImageRef, UnitId> = HashMap::new();
        let mut image_count = 0;

        for repo in &manifest.repos {
            repositories.insert(repo.name.clone());
            for image in &repo.images {
                image_count += 1;
                for platform in &image.platforms {
                    let id = UnitId(units.len());
                    let mut produces = Vec::with_capacity(platform.tags.len());
                    for tag in &platform.tags {
                        let reference = ImageRef::new(format!("{}:{}", repo.name, tag)).map_err(
                            |source| CatalogError::InvalidTag {
                                repo: repo.name.clone(),
                                source,
                            },
                        )?;
                        if let Some(&existing) = tag_index.get(&reference) {
                            return Err(CatalogError::DuplicateTag {
                                reference,
                                first: units[existing.index()].dockerfile.clone(),
                                second: platform.dockerfile.clone(),
                            });
                        }
                        tag_index.insert(reference.clone(), id);
                        produces.push(reference);
                    }

                    units.push(BuildUnit {
                        repository: repo.name.clone(),
                        key: platform.key(),
                        dockerfile: platform.dockerfile.clone(),
                        produces,
                        from: platform.from.clone(),
                    });
                }
            }
        }

        Ok(Self {
            units,
            repositories,
            tag_index,
            repo_count: manifest.repos.len(),
            image_count,
        })
    }

    /// All build units in stable (declaration) order.
    pub fn units(&self) -> &[BuildUnit] {
        &self.units
    }

    /// Iterate units with their ids, in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &BuildUnit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(i, unit)| (UnitId(i), unit))
    }

    /// Look up a unit by id.
    pub fn unit(&self, id: UnitId) -> &BuildUnit {
        &self.units[id.index()]
    }

    /// Whether a reference points outside the catalog.
    pub fn is_external(&self, reference: &ImageRef) -> bool {
        !self.repositories.contains(reference.repository())
    }

    /// Resolve an internal reference to the unit producing it.
    ///
    /// Returns `None` when no unit produces the reference; for internal
    /// references that is a manifest inconsistency the caller must treat
    /// as fatal.
    pub fn resolve(&self, reference: &ImageRef) -> Option<UnitId> {
        self.tag_index.get(reference).copied()
    }

    /// Number of repositories in the manifest.
    pub fn repo_count(&self) -> usize {
        self.repo_count
    }

    /// Number of image definitions in the manifest.
    pub fn image_count(&self) -> usize {
        self.image_count
    }
}
