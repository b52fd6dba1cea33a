//! Error types for lpbridge.
//!
//! Linearization failures (`NonlinearConstraint`, `UnsupportedConstraintType`,
//! `UnsupportedObjectiveSense`, ...) abort the matrix build. `Solver` errors
//! come out of the LP routine and are ordinary results for the caller.

use std::fmt;

use thiserror::Error;

use crate::constraints::ScalarConstraint;
use crate::expr::Variable;
use crate::problem::ObjectiveSense;

/// Error type for lpbridge operations.
#[derive(Debug, Error)]
pub enum LpError {
    /// A constraint of degree greater than one reached the simplex builder.
    #[error(transparent)]
    NonlinearConstraint(#[from] NonlinearConstraintError),

    /// The constraint is not a scalar constraint.
    #[error(
        "unsupported constraint type ({kind}) provided to the simplex builder; \
         only scalar constraints can be linearized"
    )]
    UnsupportedConstraintType {
        /// Short name of the rejected constraint shape.
        kind: &'static str,
    },

    /// The objective sense is neither minimize nor maximize.
    #[error("unsupported objective sense ({0}) provided to the simplex builder")]
    UnsupportedObjectiveSense(ObjectiveSense),

    /// An expression mentions a variable outside the variable ordering.
    #[error("variable {variable} does not appear in the variable ordering")]
    UnknownVariable {
        /// The offending variable.
        variable: Variable,
    },

    /// An expression that must be linear is not.
    #[error(
        "expression is not linear{}",
        .degree.map(|d| format!(" (degree {d})")).unwrap_or_default()
    )]
    NonlinearExpression {
        /// Polynomial degree, when the expression is polynomial at all.
        degree: Option<u32>,
    },

    /// A row does not match the fixed column count of its system.
    #[error("dimension mismatch: expected {expected} columns, got {got}")]
    DimensionMismatch {
        /// Column count of the system.
        expected: usize,
        /// Length of the rejected row.
        got: usize,
    },

    /// The LP routine failed.
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Result type for lpbridge operations.
pub type Result<T> = std::result::Result<T, LpError>;

/// A nonlinear constraint was used where only linear constraints are allowed.
///
/// Carries the (simplified) offending constraint. The description includes
/// the constraint's polynomial degree whenever both sides convert to
/// polynomial form.
#[derive(Debug, Clone)]
pub struct NonlinearConstraintError {
    /// The rejected constraint.
    pub constraint: ScalarConstraint,
}

impl NonlinearConstraintError {
    pub fn new(constraint: ScalarConstraint) -> Self {
        Self { constraint }
    }

    /// `max(degree(left), degree(right))`, or `None` if either side is not
    /// polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.constraint.degree()
    }
}

impl fmt::Display for NonlinearConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degree() {
            Some(degree) => write!(
                f,
                "nonlinear constraint ({}) with degree {} used in context where only linear constraints are allowed",
                self.constraint, degree
            ),
            None => write!(
                f,
                "nonlinear constraint ({}) used in context where only linear constraints are allowed",
                self.constraint
            ),
        }
    }
}

impl std::error::Error for NonlinearConstraintError {}

/// Failure reported by an [`LpBackend`](crate::solver::LpBackend).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Problem is infeasible.
    #[error("problem is infeasible")]
    Infeasible,

    /// Problem is unbounded.
    #[error("problem is unbounded")]
    Unbounded,

    /// Iteration or time limit reached.
    #[error("maximum iterations reached")]
    MaxIterations,

    /// Numerical difficulties.
    #[error("solver encountered numerical difficulties")]
    NumericalError,

    /// The returned point violates the constraints by more than the tolerance.
    #[error("solver returned a point violating the constraints by {residual:e} (tolerance {tolerance})")]
    Unverified {
        /// Largest row-scaled violation found.
        residual: f64,
        /// The accepted maximum.
        tolerance: f64,
    },

    /// The solution vector is shorter than the sign-split layout requires.
    #[error("solver returned {got} values, expected at least {expected}")]
    MalformedSolution {
        /// `2 * n` for `n` variables.
        expected: usize,
        /// Length actually returned.
        got: usize,
    },

    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintSense;
    use crate::expr::{constant, named_variable};

    #[test]
    fn test_nonlinear_message_includes_degree() {
        let x = named_variable("x");
        let y = named_variable("y");
        let err = NonlinearConstraintError::new(ScalarConstraint::new(
            &x * &y,
            ConstraintSense::LessEq,
            constant(1.0),
        ));
        assert_eq!(err.degree(), Some(2));
        let msg = err.to_string();
        assert!(msg.contains("degree 2"), "{msg}");
        assert!(msg.contains("x * y"), "{msg}");
    }

    #[test]
    fn test_nonlinear_message_omits_degree_for_non_polynomial() {
        let x = named_variable("x");
        let y = named_variable("y");
        let err = NonlinearConstraintError::new(ScalarConstraint::new(
            &x / &y,
            ConstraintSense::LessEq,
            constant(1.0),
        ));
        assert_eq!(err.degree(), None);
        assert!(!err.to_string().contains("degree"));
    }

    #[test]
    fn test_nonlinear_expression_message() {
        let err = LpError::NonlinearExpression { degree: Some(3) };
        assert_eq!(err.to_string(), "expression is not linear (degree 3)");
        let err = LpError::NonlinearExpression { degree: None };
        assert_eq!(err.to_string(), "expression is not linear");
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = LpError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3 columns, got 2");
    }

    #[test]
    fn test_solver_error_converts() {
        let err: LpError = SolverError::Infeasible.into();
        assert!(matches!(err, LpError::Solver(SolverError::Infeasible)));
        assert_eq!(err.to_string(), "solver error: problem is infeasible");
    }
}
