//! Version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use thiserror::Error;

use crate::constraint::Constraint;
use crate::{VersionParser, VersionParserError};

/// Error returned when a version cannot be rendered as a strict semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("pre-release label invalid for strict version: {source}")]
    InvalidPreRelease {
        #[source]
        source: VersionParserError,
    },
    #[error("build metadata invalid for strict version: {source}")]
    InvalidBuildMetadata {
        #[source]
        source: VersionParserError,
    },
    #[error("failed to generate strict string for constraint version: {source}")]
    ConstraintVersion {
        #[source]
        source: Box<RenderError>,
    },
    #[error("failed to generate strict string for constraint: {source}")]
    ConstraintSetElement {
        #[source]
        source: Box<RenderError>,
    },
}

/// A version made of a major, optional minor and patch numbers, a pre-release label and
/// build metadata.
///
/// Minor and patch keep track of whether they were given at all: `1` and `1.0.0` compare
/// equal but render differently through [`Version::to_string`]. Every method that "changes"
/// a version returns a new value and leaves `self` untouched.
///
/// Equality, hashing and ordering ignore build metadata and treat a missing minor or patch
/// as `0`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    pre_release: String,
    build_metadata: String,
}

impl Version {
    /// Create a version with all three numeric components present
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor: Some(minor),
            patch: Some(patch),
            pre_release: String::new(),
            build_metadata: String::new(),
        }
    }

    /// Create a version carrying a pre-release label
    pub fn new_with_pre_release(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: impl Into<String>,
    ) -> Self {
        Version {
            pre_release: pre_release.into(),
            ..Version::new(major, minor, patch)
        }
    }

    /// Create a version carrying both a pre-release label and build metadata
    pub fn new_with_pre_release_and_metadata(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: impl Into<String>,
        build_metadata: impl Into<String>,
    ) -> Self {
        Version {
            pre_release: pre_release.into(),
            build_metadata: build_metadata.into(),
            ..Version::new(major, minor, patch)
        }
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: Option<u64>,
        patch: Option<u64>,
        pre_release: String,
        build_metadata: String,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Parse a version with the lenient grammar
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse_version(version)
    }

    /// Parse a Semantic Versioning 2.0.0 version
    pub fn parse_strict(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse_semver(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor component, `0` when absent
    pub fn minor(&self) -> u64 {
        self.minor.unwrap_or(0)
    }

    /// Patch component, `0` when absent
    pub fn patch(&self) -> u64 {
        self.patch.unwrap_or(0)
    }

    pub fn has_minor(&self) -> bool {
        self.minor.is_some()
    }

    pub fn has_patch(&self) -> bool {
        self.patch.is_some()
    }

    /// Pre-release label, empty when absent
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// Build metadata, empty when absent
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    /// Return a copy with the given pre-release label
    pub fn set_pre_release(&self, pre_release: impl Into<String>) -> Self {
        Version {
            pre_release: pre_release.into(),
            ..self.clone()
        }
    }

    /// Return a copy with the given build metadata
    pub fn set_build_metadata(&self, build_metadata: impl Into<String>) -> Self {
        Version {
            build_metadata: build_metadata.into(),
            ..self.clone()
        }
    }

    /// Render as `major.minor.patch[-pre][+build]`, filling a missing minor or patch with `0`.
    ///
    /// Fails when the pre-release label or the build metadata would not survive strict
    /// parsing, so the output always parses back with [`Version::parse_strict`].
    pub fn strict_string(&self) -> Result<String, RenderError> {
        let parser = VersionParser::new();
        let mut rendered = format!("{}.{}.{}", self.major, self.minor(), self.patch());

        if !self.pre_release.is_empty() {
            rendered.push('-');
            rendered.push_str(&self.pre_release);
            parser
                .parse_semver(&rendered)
                .map_err(|source| RenderError::InvalidPreRelease { source })?;
        }

        if !self.build_metadata.is_empty() {
            rendered.push('+');
            rendered.push_str(&self.build_metadata);
            parser
                .parse_semver(&rendered)
                .map_err(|source| RenderError::InvalidBuildMetadata { source })?;
        }

        Ok(rendered)
    }

    /// Check if this version precedes `other`.
    ///
    /// Numeric components are compared left to right. On a tie a version without
    /// pre-release label wins over one with a label, and two labels are compared as plain
    /// strings (so `alpha.10` sorts before `alpha.2`).
    pub fn less(&self, other: &Version) -> bool {
        if self.major != other.major {
            return self.major < other.major;
        }
        if self.minor() != other.minor() {
            return self.minor() < other.minor();
        }
        if self.patch() != other.patch() {
            return self.patch() < other.patch();
        }

        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, false) => false,
            (false, true) => true,
            _ => self.pre_release < other.pre_release,
        }
    }

    pub fn greater(&self, other: &Version) -> bool {
        other.less(self) && !self.less(other)
    }

    pub fn equal(&self, other: &Version) -> bool {
        !self.less(other) && !other.less(self)
    }

    pub fn greater_equal(&self, other: &Version) -> bool {
        !self.less(other)
    }

    pub fn less_equal(&self, other: &Version) -> bool {
        !self.greater(other)
    }

    /// Check if this version satisfies a single constraint
    pub fn satisfies(&self, constraint: &Constraint) -> bool {
        constraint.matches(self)
    }

    /// Next version after this one: bumps the most specific component present (patch, then
    /// minor, then major) without filling in missing ones.
    pub fn increment(&self) -> Self {
        let mut next = self.release();

        if let Some(patch) = self.patch {
            next.patch = Some(patch.saturating_add(1));
        } else if let Some(minor) = self.minor {
            next.minor = Some(minor.saturating_add(1));
        } else {
            next.major = self.major.saturating_add(1);
        }

        next
    }

    pub fn increment_major(&self) -> Self {
        Version::new(self.major.saturating_add(1), 0, 0)
    }

    /// Bump minor (a missing minor becomes `1`) and reset patch to `0`
    pub fn increment_minor(&self) -> Self {
        Version {
            minor: Some(self.minor().saturating_add(1)),
            patch: Some(0),
            ..self.release()
        }
    }

    /// Bump patch (a missing patch becomes `1`), filling a missing minor with `0`
    pub fn increment_patch(&self) -> Self {
        Version {
            minor: Some(self.minor()),
            patch: Some(self.patch().saturating_add(1)),
            ..self.release()
        }
    }

    /// First version outside the pessimistic (`~>`) range starting at this version.
    ///
    /// `1.2.3` gives `1.3.0`, `1.2` gives `2.0` and `1` gives `2`.
    pub fn increment_pessimistic(&self) -> Self {
        let mut next = self.release();

        if self.patch.is_some() {
            next.patch = Some(0);
            next.minor = Some(self.minor().saturating_add(1));
        } else if self.minor.is_some() {
            next.minor = Some(0);
            next.major = self.major.saturating_add(1);
        } else {
            next.major = self.major.saturating_add(1);
        }

        next
    }

    /// Copy without pre-release label and build metadata
    fn release(&self) -> Self {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: String::new(),
            build_metadata: String::new(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;

        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
            if let Some(patch) = self.patch {
                write!(f, ".{}", patch)?;
            }
        }
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor().hash(state);
        self.patch().hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less(other) {
            Ordering::Less
        } else if other.less(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
