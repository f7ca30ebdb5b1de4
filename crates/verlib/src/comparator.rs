//! Version comparison utilities

use crate::constraint::Operator;
use crate::Version;

/// Comparator for comparing versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        version1.greater(version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        version1.greater_equal(version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        version1.less(version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        version1.less_equal(version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        version1.equal(version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        !version1.equal(version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// `~>` holds when version1 is at least version2 and below
    /// [`Version::increment_pessimistic`] of version2.
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        match operator {
            Operator::Equal => Self::equal_to(version1, version2),
            Operator::NotEqual => Self::not_equal_to(version1, version2),
            Operator::GreaterThan => Self::greater_than(version1, version2),
            Operator::GreaterThanOrEqual => Self::greater_than_or_equal_to(version1, version2),
            Operator::LessThan => Self::less_than(version1, version2),
            Operator::LessThanOrEqual => Self::less_than_or_equal_to(version1, version2),
            Operator::Pessimistic => {
                Self::greater_than_or_equal_to(version1, version2)
                    && Self::less_than(version1, &version2.increment_pessimistic())
            }
        }
    }
}
