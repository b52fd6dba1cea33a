//! # lpbridge
//!
//! Linearize symbolic linear programs into matrix form and solve them.
//!
//! Problems are written with ordinary arithmetic over [`Variable`](expr::Variable)s.
//! Each constraint is rewritten into one row of either
//!
//! ```text
//! G x <= h    (inequalities)
//! A x == b    (equalities)
//! ```
//!
//! relative to a fixed variable ordering, the objective becomes the vector
//! `c`, and the assembled LP is handed to an [`LpBackend`](solver::LpBackend).
//!
//! ## Quick Start
//!
//! ```no_run
//! use lpbridge::prelude::*;
//!
//! let x = variables(2, "x");
//! let solution = Problem::minimize(-&x[0] - &x[1])
//!     .over(x.clone())
//!     .subject_to([
//!         x[0].leq(2.0),
//!         x[1].leq(1.0),
//!         x[0].geq(0.0),
//!         x[1].geq(0.0),
//!     ])
//!     .solve()?;
//!
//! assert_eq!(solution.variables, vec![2.0, 1.0]);
//! # Ok::<(), lpbridge::LpError>(())
//! ```
//!
//! ## Linearity
//!
//! Only expressions of polynomial degree at most one can be turned into
//! matrix rows. A constraint such as `x * y <= 1` is rejected with
//! [`LpError::NonlinearConstraint`], which carries the offending constraint.
//!
//! ## Architecture
//!
//! - **Expression trees** built using the `Expr` enum with `Arc` sharing
//! - **Linear-form extraction** reads coefficient vectors through `PolynomialLike`
//! - **Normalization** moves everything to one side: `lhs - rhs <= 0`
//! - **Simplex builder** appends one row per accepted constraint
//! - **Clarabel backend** solves the LP; values come back sign-split and are
//!   folded and rounded ties-to-even

pub mod canon;
pub mod constraints;
pub mod error;
pub mod expr;
pub mod problem;
pub mod solver;
pub mod sparse;

/// Prelude module for convenient imports.
///
/// ```
/// use lpbridge::prelude::*;
/// ```
pub mod prelude {
    // Expressions
    pub use crate::expr::{
        constant, dot, named_variable, sum, variable, variables, Expr, Polynomial,
        PolynomialLike, Variable,
    };

    // Constraints
    pub use crate::constraints::{
        Constraint, ConstraintExt, ConstraintSense, ScalarConstraint, VectorConstraint,
    };

    // Problem
    pub use crate::problem::{Objective, ObjectiveSense, Problem, ProblemBuilder};

    // Solver
    pub use crate::solver::{LpBackend, Settings, SimplexBuilder, Solution};

    // Errors
    pub use crate::error::{LpError, Result, SolverError};
}

// Re-export main types at crate root
pub use error::{LpError, Result};
pub use problem::Problem;
pub use solver::Solution;
