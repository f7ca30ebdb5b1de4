//! Constraint types for version matching

mod constraint;
mod constraints;
mod contradiction;
mod operator;

pub use constraint::Constraint;
pub use constraints::Constraints;
pub use contradiction::{ContradictionError, Contradictions};
pub use operator::{InvalidOperatorError, Operator};
