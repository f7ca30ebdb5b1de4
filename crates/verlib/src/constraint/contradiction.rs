//! Contradiction reporting between constraints

use thiserror::Error;

use super::Constraint;

/// Two constraints that no single version can satisfy at the same time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("constraints '{first}' and '{second}' are contradictory")]
pub struct ContradictionError {
    first: Constraint,
    second: Constraint,
}

impl ContradictionError {
    pub fn new(first: Constraint, second: Constraint) -> Self {
        ContradictionError { first, second }
    }

    /// The two constraints which caused the error, in set order
    pub fn constraints(&self) -> (&Constraint, &Constraint) {
        (&self.first, &self.second)
    }
}

/// Every contradictory pair found in a constraint set.
///
/// Renders one [`ContradictionError`] message per line.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", join_messages(.errors))]
pub struct Contradictions {
    errors: Vec<ContradictionError>,
}

impl Contradictions {
    pub(crate) fn push(&mut self, error: ContradictionError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContradictionError> {
        self.errors.iter()
    }

    /// The offending constraint pairs, in the order they were found
    pub fn pairs(&self) -> impl Iterator<Item = (&Constraint, &Constraint)> + '_ {
        self.errors.iter().map(ContradictionError::constraints)
    }

    pub fn into_errors(self) -> Vec<ContradictionError> {
        self.errors
    }
}

fn join_messages(errors: &[ContradictionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl<'a> IntoIterator for &'a Contradictions {
    type Item = &'a ContradictionError;
    type IntoIter = std::slice::Iter<'a, ContradictionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for Contradictions {
    type Item = ContradictionError;
    type IntoIter = std::vec::IntoIter<ContradictionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
