//! Constraint types for optimization problems.
//!
//! Only scalar constraints can be linearized into matrix rows:
//! - `LessEq`: left <= right (row of G, h)
//! - `GreaterEq`: left >= right (negated row of G, h)
//! - `Equal`: left == right (row of A, b)
//!
//! Vector constraints are representable but must be split with
//! [`VectorConstraint::into_scalars`] before they can be added to a builder.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{LpError, Result};
use crate::expr::{Expr, PolynomialLike, Variable};

/// Comparison sense of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintSense {
    /// left <= right
    LessEq,
    /// left == right
    Equal,
    /// left >= right
    GreaterEq,
}

impl fmt::Display for ConstraintSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintSense::LessEq => "<=",
            ConstraintSense::Equal => "==",
            ConstraintSense::GreaterEq => ">=",
        })
    }
}

/// A comparison between two scalar expressions.
#[derive(Debug, Clone)]
pub struct ScalarConstraint {
    left: Expr,
    right: Expr,
    sense: ConstraintSense,
}

impl ScalarConstraint {
    pub fn new(left: impl Into<Expr>, sense: ConstraintSense, right: impl Into<Expr>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            sense,
        }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn sense(&self) -> ConstraintSense {
        self.sense
    }

    /// Simplify both sides.
    pub fn simplify(&self) -> ScalarConstraint {
        ScalarConstraint {
            left: self.left.simplify(),
            right: self.right.simplify(),
            sense: self.sense,
        }
    }

    /// `max(degree(left), degree(right))`, or `None` when either side is not
    /// polynomial.
    pub fn degree(&self) -> Option<u32> {
        let left = self.left.to_polynomial()?;
        let right = self.right.to_polynomial()?;
        Some(left.degree().max(right.degree()))
    }

    /// Check if both sides are polynomial of degree at most one.
    pub fn is_linear(&self) -> bool {
        matches!(self.degree(), Some(d) if d <= 1)
    }

    /// Get all variables in this constraint, in creation order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = BTreeSet::new();
        self.left.collect_variables(&mut vars);
        self.right.collect_variables(&mut vars);
        vars.into_iter().collect()
    }
}

impl fmt::Display for ScalarConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.sense, self.right)
    }
}

/// Element-wise comparison of two equally long expression lists.
#[derive(Debug, Clone)]
pub struct VectorConstraint {
    left: Vec<Expr>,
    right: Vec<Expr>,
    sense: ConstraintSense,
}

impl VectorConstraint {
    /// Create a vector constraint. Both sides must have the same length.
    pub fn new(left: Vec<Expr>, sense: ConstraintSense, right: Vec<Expr>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(LpError::DimensionMismatch {
                expected: left.len(),
                got: right.len(),
            });
        }
        Ok(Self { left, right, sense })
    }

    /// Number of scalar comparisons.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn sense(&self) -> ConstraintSense {
        self.sense
    }

    /// Split into one scalar constraint per element, in order.
    pub fn into_scalars(self) -> Vec<ScalarConstraint> {
        let sense = self.sense;
        self.left
            .into_iter()
            .zip(self.right)
            .map(|(l, r)| ScalarConstraint::new(l, sense, r))
            .collect()
    }
}

/// A constraint in an optimization problem.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// A single comparison.
    Scalar(ScalarConstraint),
    /// Element-wise comparison of expression lists.
    Vector(VectorConstraint),
}

impl Constraint {
    /// Create an inequality constraint: lhs <= rhs.
    pub fn leq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Constraint::Scalar(ScalarConstraint::new(lhs, ConstraintSense::LessEq, rhs))
    }

    /// Create an inequality constraint: lhs >= rhs.
    pub fn geq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Constraint::Scalar(ScalarConstraint::new(lhs, ConstraintSense::GreaterEq, rhs))
    }

    /// Create an equality constraint: lhs == rhs.
    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Constraint::Scalar(ScalarConstraint::new(lhs, ConstraintSense::Equal, rhs))
    }

    /// Short name of the constraint shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::Scalar(_) => "scalar",
            Constraint::Vector(_) => "vector",
        }
    }

    /// Get all variables in this constraint, in creation order.
    pub fn variables(&self) -> Vec<Variable> {
        match self {
            Constraint::Scalar(c) => c.variables(),
            Constraint::Vector(c) => {
                let mut vars = BTreeSet::new();
                for e in c.left.iter().chain(&c.right) {
                    e.collect_variables(&mut vars);
                }
                vars.into_iter().collect()
            }
        }
    }
}

impl From<ScalarConstraint> for Constraint {
    fn from(c: ScalarConstraint) -> Self {
        Constraint::Scalar(c)
    }
}

impl From<VectorConstraint> for Constraint {
    fn from(c: VectorConstraint) -> Self {
        Constraint::Vector(c)
    }
}

/// Extension trait for creating constraints from expressions.
pub trait ConstraintExt {
    /// Create inequality constraint: self <= rhs.
    fn leq(&self, rhs: impl Into<Expr>) -> Constraint;

    /// Create inequality constraint: self >= rhs.
    fn geq(&self, rhs: impl Into<Expr>) -> Constraint;

    /// Create equality constraint: self == rhs.
    fn equals(&self, rhs: impl Into<Expr>) -> Constraint;
}

impl ConstraintExt for Expr {
    fn leq(&self, rhs: impl Into<Expr>) -> Constraint {
        Constraint::leq(self.clone(), rhs)
    }

    fn geq(&self, rhs: impl Into<Expr>) -> Constraint {
        Constraint::geq(self.clone(), rhs)
    }

    fn equals(&self, rhs: impl Into<Expr>) -> Constraint {
        Constraint::eq(self.clone(), rhs)
    }
}

impl ConstraintExt for Variable {
    fn leq(&self, rhs: impl Into<Expr>) -> Constraint {
        Constraint::leq(self, rhs)
    }

    fn geq(&self, rhs: impl Into<Expr>) -> Constraint {
        Constraint::geq(self, rhs)
    }

    fn equals(&self, rhs: impl Into<Expr>) -> Constraint {
        Constraint::eq(self, rhs)
    }
}
