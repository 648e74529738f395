//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Os`] - Operating system of a build unit
//! - [`Architecture`] - CPU architecture with short and display names
//! - [`ImageRef`] - Validated image reference (`repo` or `repo:tag`)
//! - [`DockerfilePath`] - Validated catalog-relative Dockerfile path
//! - [`PlatformKey`] - The (OS, OS version, architecture) grouping key
//! - [`Fingerprint`] - Content hash of an emitted matrix set
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use buildmatrix::core::types::{DockerfilePath, ImageRef};
//!
//! // Valid constructions
//! let path = DockerfilePath::new("1.0/runtime/linux/amd64/Dockerfile").unwrap();
//! let reference = ImageRef::new("app/runtime:1.0-bionic").unwrap();
//! assert_eq!(reference.repository(), "app/runtime");
//!
//! // Invalid constructions fail at creation time
//! assert!(DockerfilePath::new("/absolute/Dockerfile").is_err());
//! assert!(ImageRef::new("has space:tag").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid image reference: {0}")]
    InvalidImageRef(String),

    #[error("invalid dockerfile path: {0}")]
    InvalidDockerfilePath(String),
}

/// Operating system of a build unit.
///
/// The declaration order is significant: matrices are enumerated with
/// this order as the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Windows,
}

impl Os {
    /// Get the lowercase OS name as used in matrix names and manifests.
    pub fn name(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// CPU architecture of a build unit.
///
/// The declaration order is significant: within an OS, matrices are
/// enumerated with this order as the final key. Each architecture has a
/// short name (manifest spelling) and a display name (used in matrix
/// names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Amd64,
    Arm,
    Arm64,
}

impl Architecture {
    /// Get the short architecture name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Architecture::Amd64 => "amd64",
            Architecture::Arm => "arm",
            Architecture::Arm64 => "arm64",
        }
    }

    /// Get the display name used when deriving matrix names.
    pub fn display_name(&self) -> &'static str {
        match self {
            Architecture::Amd64 => "amd64",
            Architecture::Arm => "arm32",
            Architecture::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A validated image reference.
///
/// References take the form `repository` or `repository:tag`, where the
/// repository may contain `/` separators. References must:
/// - Not be empty
/// - Not contain whitespace or ASCII control characters
/// - Have a non-empty repository, and a non-empty tag when one is given
///
/// # Example
///
/// ```
/// use buildmatrix::core::types::ImageRef;
///
/// let tagged = ImageRef::new("app/runtime:1.0-bionic").unwrap();
/// assert_eq!(tagged.repository(), "app/runtime");
/// assert_eq!(tagged.tag(), Some("1.0-bionic"));
///
/// let untagged = ImageRef::new("ubuntu").unwrap();
/// assert_eq!(untagged.repository(), "ubuntu");
/// assert_eq!(untagged.tag(), None);
///
/// assert!(ImageRef::new("").is_err());
/// assert!(ImageRef::new("app/runtime:").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a new validated image reference.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidImageRef` if the reference is malformed.
    pub fn new(reference: impl Into<String>) -> Result<Self, TypeError> {
        let reference = reference.into();
        Self::validate(&reference)?;
        Ok(Self(reference))
    }

    fn validate(reference: &str) -> Result<(), TypeError> {
        if reference.is_empty() {
            return Err(TypeError::InvalidImageRef(
                "image reference cannot be empty".into(),
            ));
        }

        for c in reference.chars() {
            if c.is_whitespace() || c.is_ascii_control() {
                return Err(TypeError::InvalidImageRef(
                    "image reference cannot contain whitespace or control characters".into(),
                ));
            }
        }

        let (repository, _tag) = Self::split(reference);
        if repository.is_empty() {
            return Err(TypeError::InvalidImageRef(
                "image reference must have a repository".into(),
            ));
        }
        if reference.ends_with(':') {
            return Err(TypeError::InvalidImageRef(
                "image reference tag cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Split a reference into repository and optional tag.
    ///
    /// A trailing `:segment` is only a tag if it contains no `/`, so
    /// registry references like `localhost:5000/repo` keep their port.
    fn split(reference: &str) -> (&str, Option<&str>) {
        match reference.rsplit_once(':') {
            Some((repository, tag)) if !tag.is_empty() && !tag.contains('/') => {
                (repository, Some(tag))
            }
            _ => (reference, None),
        }
    }

    /// Get the repository portion of the reference.
    pub fn repository(&self) -> &str {
        Self::split(&self.0).0
    }

    /// Get the tag portion of the reference, if any.
    pub fn tag(&self) -> Option<&str> {
        Self::split(&self.0).1
    }

    /// Get the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated catalog-relative Dockerfile path.
///
/// Paths are always `/`-separated regardless of host platform, since
/// they name entries in the catalog rather than files this tool opens.
/// Paths must:
/// - Not be empty
/// - Not be absolute and not end with `/`
/// - Not contain empty components, backslashes, or whitespace
///
/// # Example
///
/// ```
/// use buildmatrix::core::types::DockerfilePath;
///
/// let path = DockerfilePath::new("1.0/runtime/linux/amd64/Dockerfile").unwrap();
/// assert_eq!(path.segments().count(), 5);
///
/// assert!(DockerfilePath::new("a//b").is_err());
/// assert!(DockerfilePath::new("a\\b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DockerfilePath(String);

impl DockerfilePath {
    /// Create a new validated Dockerfile path.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDockerfilePath` if the path is malformed.
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        Self::validate(&path)?;
        Ok(Self(path))
    }

    fn validate(path: &str) -> Result<(), TypeError> {
        if path.is_empty() {
            return Err(TypeError::InvalidDockerfilePath(
                "path cannot be empty".into(),
            ));
        }

        if path.starts_with('/') {
            return Err(TypeError::InvalidDockerfilePath(
                "path cannot be absolute".into(),
            ));
        }
        if path.ends_with('/') {
            return Err(TypeError::InvalidDockerfilePath(
                "path cannot end with '/'".into(),
            ));
        }

        if path.contains('\\') {
            return Err(TypeError::InvalidDockerfilePath(
                "path must use '/' separators".into(),
            ));
        }

        for c in path.chars() {
            if c.is_whitespace() || c.is_ascii_control() {
                return Err(TypeError::InvalidDockerfilePath(
                    "path cannot contain whitespace or control characters".into(),
                ));
            }
        }

        if path.split('/').any(|segment| segment.is_empty()) {
            return Err(TypeError::InvalidDockerfilePath(
                "path cannot contain empty components".into(),
            ));
        }

        Ok(())
    }

    /// Iterate over the `/`-separated path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DockerfilePath {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DockerfilePath> for String {
    fn from(value: DockerfilePath) -> Self {
        value.0
    }
}

impl fmt::Display for DockerfilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The platform grouping key: (OS, OS version, architecture).
///
/// Two build units belong to the same matrix group exactly when their
/// keys are equal. The OS version comparison is case-sensitive.
///
/// # Ordering
///
/// Group enumeration order is encoded in `Ord`:
/// 1. OS, in enum declaration order
/// 2. OS version, **descending** (newer Windows versions surface first
///    in CI dashboards)
/// 3. Architecture, in enum declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformKey {
    pub os: Os,
    pub os_version: Option<String>,
    pub architecture: Architecture,
}

impl PlatformKey {
    /// The OS qualifier used in matrix names.
    ///
    /// Windows uses the OS version so that server versions produce
    /// distinct matrices; everything else uses the OS name.
    pub fn os_qualifier(&self) -> &str {
        match (&self.os, self.os_version.as_deref()) {
            (Os::Windows, Some(version)) => version,
            _ => self.os.name(),
        }
    }
}

impl Ord for PlatformKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.os
            .cmp(&other.os)
            .then_with(|| other.os_version.cmp(&self.os_version))
            .then_with(|| self.architecture.cmp(&other.architecture))
    }
}

impl PartialOrd for PlatformKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.os,
            self.os_version.as_deref().unwrap_or("-"),
            self.architecture
        )
    }
}

/// A content fingerprint of an emitted matrix set.
///
/// Because generation is deterministic, the fingerprint only changes
/// when the catalog changes, so callers can use it to cache or diff CI
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint over emitted lines.
    ///
    /// Line order is part of the hash: emission order is significant to
    /// consumers, so reordered output must produce a different value.
    pub fn compute<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut hasher = Sha256::new();
        for line in lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        let result = hasher.finalize();
        Self(hex::encode(result))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get an abbreviated form suitable for log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
