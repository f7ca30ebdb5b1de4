//! Semantic version parsing, comparison and constraint checks
//!
//! This crate parses version strings (leniently or strictly per Semantic Versioning 2.0.0),
//! orders them, evaluates range constraints against them and reports every pair of
//! constraints in a set that no single version can satisfy.

mod comparator;
pub mod constraint;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use constraint::{
    Constraint, Constraints, ContradictionError, Contradictions, InvalidOperatorError, Operator,
};
pub use semver::{Semver, SemverError};
pub use version::{RenderError, Version};
pub use version_parser::{ParseMode, VersionParser, VersionParserError};
