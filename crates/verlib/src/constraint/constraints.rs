//! Ordered constraint sets

use std::fmt;
use std::str::FromStr;

use super::{Constraint, ContradictionError, Contradictions};
use crate::{ParseMode, RenderError, Version, VersionParser, VersionParserError};

/// An ordered set of constraints which a version has to satisfy all at once.
///
/// The order only matters for rendering and for the order in which contradictions are
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Constraints {
    constraints: Vec<Constraint>,
}

impl Constraints {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Constraints { constraints }
    }

    /// Parse a comma separated constraint list with the grammar selected by `mode`
    pub fn parse(constraints: &str, mode: ParseMode) -> Result<Self, VersionParserError> {
        let parser = VersionParser::new();
        match mode {
            ParseMode::Lenient => parser.parse_constraint_set(constraints),
            ParseMode::Strict => parser.parse_strict_constraint_set(constraints),
        }
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Check if `version` satisfies every constraint of the set
    pub fn matches(&self, version: &Version) -> bool {
        self.constraints.iter().all(|constraint| constraint.matches(version))
    }

    /// Render every constraint strictly, joined by `", "`
    pub fn strict_string(&self) -> Result<String, RenderError> {
        let rendered = self
            .constraints
            .iter()
            .map(|constraint| {
                constraint
                    .strict_string()
                    .map_err(|source| RenderError::ConstraintSetElement {
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rendered.join(", "))
    }

    /// Check this set, followed by every `additional` set, for contradictions.
    ///
    /// Every pair is looked at once and tested in both directions. All contradictory pairs
    /// are collected, not only the first one.
    pub fn contradicts(&self, additional: &[&Constraints]) -> Result<(), Contradictions> {
        let all: Vec<&Constraint> = self
            .constraints
            .iter()
            .chain(additional.iter().flat_map(|set| set.iter()))
            .collect();

        let mut contradictions = Contradictions::default();
        for (i, first) in all.iter().enumerate() {
            for second in &all[i + 1..] {
                if first.contradicts(second) || second.contradicts(first) {
                    log::debug!("Constraints '{}' and '{}' are contradictory", first, second);
                    contradictions.push(ContradictionError::new((*first).clone(), (*second).clone()));
                }
            }
        }

        if contradictions.is_empty() {
            return Ok(());
        }

        log::debug!(
            "Found {} contradictory pair(s) among {} constraints",
            contradictions.len(),
            all.len()
        );
        Err(contradictions)
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.constraints.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", constraint)?;
        }
        Ok(())
    }
}

impl FromStr for Constraints {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraints::parse(s, ParseMode::Lenient)
    }
}

impl From<Vec<Constraint>> for Constraints {
    fn from(constraints: Vec<Constraint>) -> Self {
        Constraints::new(constraints)
    }
}

impl FromIterator<Constraint> for Constraints {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Constraints::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Constraints {
    type Item = &'a Constraint;
    type IntoIter = std::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

impl IntoIterator for Constraints {
    type Item = Constraint;
    type IntoIter = std::vec::IntoIter<Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}
