//! Constraint normalization.
//!
//! Turns one symbolic constraint into one canonical matrix row:
//! - `left <= right` becomes `lin(left - right) · x <= -const(left - right)`
//! - `left >= right` becomes `lin(right - left) · x <= -const(right - left)`
//! - `left == right` becomes `lin(left - right) · x == -const(left - right)`

use tracing::trace;

use super::extract::VariableIndex;
use crate::constraints::{Constraint, ConstraintSense};
use crate::error::{LpError, NonlinearConstraintError, Result};
use crate::expr::{PolynomialLike, Variable};

/// One row of a linear system: `coeffs · x (<= | ==) bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRow {
    /// One coefficient per variable of the ordering.
    pub coeffs: Vec<f64>,
    /// Right-hand side.
    pub bound: f64,
}

/// Which system a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Row of `G x <= h`.
    Inequality,
    /// Row of `A x == b`.
    Equality,
}

/// A normalized constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub kind: RowKind,
    pub row: LinearRow,
}

/// Normalize `constraint` with respect to `order`.
///
/// # Examples
///
/// ```
/// use lpbridge::canon::{normalize, RowKind};
/// use lpbridge::constraints::ConstraintExt;
/// use lpbridge::expr::variables;
///
/// let x = variables(2, "x");
/// let row = normalize(&(&x[0] + 2.0 * &x[1]).leq(4.0), &x).unwrap();
/// assert_eq!(row.kind, RowKind::Inequality);
/// assert_eq!(row.row.coeffs, vec![1.0, 2.0]);
/// assert_eq!(row.row.bound, 4.0);
/// ```
pub fn normalize(constraint: &Constraint, order: &[Variable]) -> Result<NormalizedRow> {
    normalize_with(constraint, &VariableIndex::new(order))
}

/// Normalize `constraint` against a prebuilt column index.
pub fn normalize_with(constraint: &Constraint, index: &VariableIndex) -> Result<NormalizedRow> {
    let scalar = match constraint {
        Constraint::Scalar(c) => c,
        Constraint::Vector(_) => {
            return Err(LpError::UnsupportedConstraintType {
                kind: constraint.kind(),
            })
        }
    };

    let simplified = scalar.simplify();
    let (left, right) = match (
        simplified.left().to_polynomial(),
        simplified.right().to_polynomial(),
    ) {
        (Some(l), Some(r)) if l.degree().max(r.degree()) <= 1 => (l, r),
        _ => return Err(NonlinearConstraintError::new(simplified).into()),
    };

    let (difference, kind) = match simplified.sense() {
        ConstraintSense::LessEq => (left.sub(&right), RowKind::Inequality),
        ConstraintSense::GreaterEq => (right.sub(&left), RowKind::Inequality),
        ConstraintSense::Equal => (left.sub(&right), RowKind::Equality),
    };

    let form = index.extract(&difference)?;
    trace!(constraint = %simplified, ?kind, "normalized constraint");

    Ok(NormalizedRow {
        kind,
        row: LinearRow {
            coeffs: form.coeffs,
            bound: -form.constant,
        },
    })
}
