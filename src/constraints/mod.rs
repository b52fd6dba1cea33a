//! Constraints over expressions.

pub mod constraint;

pub use constraint::{
    Constraint, ConstraintExt, ConstraintSense, ScalarConstraint, VectorConstraint,
};
