//! Interface to the numeric LP routine.

use super::builder::GeneralForm;
use crate::error::SolverError;

/// Raw result of an LP routine.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSolution {
    /// Optimal value of the minimized objective `cᵀx`.
    pub objective_value: f64,
    /// Solution in sign-split layout: entries `0..n` hold the positive
    /// parts, entries `n..2n` the negative parts of the `n` problem
    /// variables. Any further entries (e.g. slacks) are ignored.
    pub x: Vec<f64>,
}

/// An LP routine that minimizes a [`GeneralForm`] problem over free
/// variables.
pub trait LpBackend {
    /// Solve `lp` with numerical tolerance `tolerance`.
    fn simplex(&self, lp: &GeneralForm, tolerance: f64) -> Result<RawSolution, SolverError>;
}

impl<B: LpBackend + ?Sized> LpBackend for &B {
    fn simplex(&self, lp: &GeneralForm, tolerance: f64) -> Result<RawSolution, SolverError> {
        (**self).simplex(lp, tolerance)
    }
}
