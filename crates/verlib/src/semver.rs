//! Semver facade providing high-level version operations

use thiserror::Error;

use crate::{Constraints, Contradictions, Version, VersionParser, VersionParserError};

/// Error returned by [`Semver::contradicts`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Parse(#[from] VersionParserError),
    #[error(transparent)]
    Contradiction(#[from] Contradictions),
}

/// Main facade for string based version operations, all parsing is lenient
pub struct Semver;

impl Semver {
    /// Check if a version satisfies every constraint of a comma separated list.
    ///
    /// Returns false when either side fails to parse.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let parser = VersionParser::new();

        let version = match parser.parse_version(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match parser.parse_constraint_set(constraints) {
            Ok(parsed) => parsed.matches(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given constraints
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let parser = VersionParser::new();
        let parsed = match parser.parse_constraint_set(constraints) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| {
                parser
                    .parse_version(v)
                    .map(|version| parsed.matches(&version))
                    .unwrap_or(false)
            })
            .map(|v| v.to_string())
            .collect()
    }

    /// Check a comma separated constraint list for contradictory pairs
    pub fn contradicts(constraints: &str) -> Result<(), SemverError> {
        let parsed: Constraints = constraints.parse()?;
        parsed.contradicts(&[])?;
        Ok(())
    }

    /// Sort versions in ascending order, dropping the ones that do not parse
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        let mut parsed: Vec<(Version, &str)> = versions
            .iter()
            .filter_map(|v| parser.parse_version(v).ok().map(|version| (version, *v)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed.into_iter().map(|(_, v)| v.to_string()).collect()
    }
}
