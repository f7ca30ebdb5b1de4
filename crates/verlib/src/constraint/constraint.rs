//! Single version constraint implementation

use std::fmt;
use std::str::FromStr;

use super::Operator;
use crate::{Comparator, ParseMode, RenderError, Version, VersionParser, VersionParserError};

/// A single version constraint (e.g., ">= 1.0.0")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Parse a constraint with the grammar selected by `mode`
    pub fn parse(constraint: &str, mode: ParseMode) -> Result<Self, VersionParserError> {
        VersionParser::new().parse_constraint_with(constraint, mode)
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if `version` satisfies this constraint
    pub fn matches(&self, version: &Version) -> bool {
        Comparator::compare(version, self.operator, &self.version)
    }

    /// Render as `<operator> <strict version>`
    pub fn strict_string(&self) -> Result<String, RenderError> {
        let version = self
            .version
            .strict_string()
            .map_err(|source| RenderError::ConstraintVersion {
                source: Box::new(source),
            })?;

        Ok(format!("{} {}", self.operator, version))
    }

    /// Check if some version could satisfy both `self` and `other`.
    ///
    /// This is a table over the operator pair, not an interval intersection, and it is not
    /// symmetric: `>` is only checked against the other bound, and a `~>` paired with `>=`
    /// uses [`Version::increment`] as the upper end where matching uses
    /// [`Version::increment_pessimistic`].
    pub fn overlaps(&self, other: &Constraint) -> bool {
        use Operator::*;

        let (this, that) = (&self.version, &other.version);
        match (self.operator, other.operator) {
            (Equal, _) => this.satisfies(other),
            (NotEqual, _) => !this.satisfies(other),
            (GreaterThan, _) => this.less_equal(that),
            (GreaterThanOrEqual, Pessimistic) => {
                this.greater_equal(that) && this.less(&that.increment())
            }
            (Pessimistic, GreaterThanOrEqual) => {
                that.greater_equal(this) && that.less(&this.increment())
            }
            (GreaterThanOrEqual, _) => this.less(that),
            (LessThan, LessThanOrEqual) => that.less(this),
            (LessThanOrEqual, LessThan) => this.less(that),
            (LessThan, Pessimistic) => that.less(this) || that.equal(this),
            (Pessimistic, LessThan) => this.less(that) || this.equal(that),
            (LessThan, _) => this.greater_equal(that),
            (LessThanOrEqual, _) => this.greater(that),
            (Pessimistic, _) => that.greater_equal(this) && that.less(&this.increment()),
        }
    }

    /// Check if no version can satisfy both `self` and `other`.
    ///
    /// Like [`Constraint::overlaps`] the answer depends on argument order, callers checking
    /// a pair should ask both ways.
    pub fn contradicts(&self, other: &Constraint) -> bool {
        use Operator::*;

        let (this, that) = (&self.version, &other.version);
        match (self.operator, other.operator) {
            (a, b) if a == b && this.equal(that) => false,
            (GreaterThan, GreaterThanOrEqual) if this.less_equal(that) => false,
            (GreaterThanOrEqual, GreaterThan) if this.greater(that) => false,
            (NotEqual, NotEqual) => this.equal(that),
            (NotEqual, _) => this.satisfies(other),
            (_, NotEqual) => that.satisfies(self),
            _ => !self.overlaps(other),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}

impl FromStr for Constraint {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s, ParseMode::Lenient)
    }
}

impl TryFrom<String> for Constraint {
    type Error = VersionParserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Constraint> for String {
    fn from(constraint: Constraint) -> Self {
        constraint.to_string()
    }
}
