//! Symbolic expressions over decision variables.
//!
//! This module provides:
//! - `Variable` - scalar decision variables with stable identity
//! - `Expr` - expression trees built with the usual arithmetic operators
//! - `Polynomial` and the `PolynomialLike` capability used for linearization

pub mod expression;
pub mod ops;
pub mod polynomial;
pub mod variable;

// Re-export main types
pub use expression::{constant, dot, sum, Expr};
pub use polynomial::{Monomial, Polynomial, PolynomialLike};
pub use variable::{named_variable, variable, variables, VarId, Variable};
