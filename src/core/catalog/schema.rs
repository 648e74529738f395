//! core::catalog::schema
//!
//! Serde schema for the declarative image manifest.
//!
//! # Format
//!
//! The manifest is a JSON document describing repositories, the images
//! they contain, and the per-platform Dockerfiles that build each
//! image:
//!
//! ```json
//! {
//!   "repos": [
//!     {
//!       "name": "app/runtime",
//!       "images": [
//!         {
//!           "sharedTags": ["latest"],
//!           "platforms": [
//!             {
//!               "os": "linux",
//!               "osVersion": "bionic",
//!               "architecture": "amd64",
//!               "dockerfile": "1.0/runtime/linux/amd64/Dockerfile",
//!               "tags": ["1.0-bionic"],
//!               "from": ["ubuntu:bionic"]
//!             }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! # Strictness
//!
//! Unknown fields are rejected, and every reference and path is
//! validated at parse time by the strong types in [`crate::core::types`].
//! Dockerfile contents are never read; `from` lists the base-image
//! references a Dockerfile declares.

use serde::{Deserialize, Serialize};

use crate::core::types::{Architecture, DockerfilePath, ImageRef, Os, PlatformKey};

/// The root manifest document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Repositories in declaration order.
    pub repos: Vec<Repo>,
}

/// One image repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Repo {
    /// Repository name (e.g. "app/runtime").
    pub name: String,

    /// Images in declaration order.
    pub images: Vec<Image>,
}

/// One image definition: a set of platform-specific build units plus
/// tags shared across all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Image {
    /// Tags applied to every platform of this image.
    #[serde(default)]
    pub shared_tags: Vec<String>,

    /// Platforms in declaration order.
    pub platforms: Vec<Platform>,
}

/// One platform-specific build unit as declared in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Platform {
    /// Operating system.
    pub os: Os,

    /// OS version (e.g. "nanoserver-1809"); meaningful mainly for Windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    /// CPU architecture.
    pub architecture: Architecture,

    /// Catalog-relative path of the Dockerfile this unit builds.
    pub dockerfile: DockerfilePath,

    /// Tags this unit produces, relative to the repository name.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Base-image references the Dockerfile declares as build-stage sources.
    #[serde(default)]
    pub from: Vec<ImageRef>,
}

impl Platform {
    /// The grouping key for this platform.
    pub fn key(&self) -> PlatformKey {
        PlatformKey {
            os: self.os,
            os_version: self.os_version.clone(),
            architecture: self.architecture,
        }
    }
}
