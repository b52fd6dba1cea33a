//! Clarabel solver integration.
//!
//! The general-form LP maps onto Clarabel's conic form `A x + s = b` as
//!
//! ```text
//! [A_eq] x + s = [b]    s in ZeroCone
//! [G   ]         [h]    s in NonnegativeCone
//! ```
//!
//! with free `x` and zero quadratic cost. The primal point is reported in
//! sign-split layout, `[max(x, 0); max(-x, 0)]`.

use clarabel::algebra::CscMatrix as ClarabelCsc;
use clarabel::solver::{
    DefaultSettingsBuilder, DefaultSolver, IPSolver, SolverStatus, SupportedConeT,
};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

use super::backend::{LpBackend, RawSolution};
use super::builder::GeneralForm;
use super::settings::Settings;
use crate::error::SolverError;
use crate::sparse::{csc_vstack, dense_to_csc, to_clarabel_csc};

/// LP backend backed by the Clarabel interior-point solver.
#[derive(Debug, Clone)]
pub struct ClarabelBackend {
    verbose: bool,
    max_iter: u32,
    time_limit: f64,
    tol_gap_abs: f64,
    tol_gap_rel: f64,
}

impl ClarabelBackend {
    pub fn new(settings: &Settings) -> Self {
        Self {
            verbose: settings.verbose,
            max_iter: settings.max_iter,
            time_limit: settings.time_limit,
            tol_gap_abs: settings.tol_gap_abs,
            tol_gap_rel: settings.tol_gap_rel,
        }
    }
}

impl Default for ClarabelBackend {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl LpBackend for ClarabelBackend {
    fn simplex(&self, lp: &GeneralForm, tolerance: f64) -> Result<RawSolution, SolverError> {
        let n = lp.num_variables();
        let empty_rhs = Vec::new();
        let empty = DMatrix::zeros(0, n);
        let a_eq = lp.a.as_ref().unwrap_or(&empty);
        let b_eq = lp.b.as_ref().unwrap_or(&empty_rhs);
        let m_eq = a_eq.nrows();
        let m_ineq = lp.g.nrows();

        if m_eq + m_ineq == 0 {
            return solve_unconstrained(&lp.c);
        }

        let a = to_clarabel_csc(&csc_vstack(n, &[&dense_to_csc(a_eq), &dense_to_csc(&lp.g)]));
        let b: Vec<f64> = b_eq.iter().chain(&lp.h).copied().collect();
        let mut cones = Vec::new();
        if m_eq > 0 {
            cones.push(SupportedConeT::ZeroConeT(m_eq));
        }
        if m_ineq > 0 {
            cones.push(SupportedConeT::NonnegativeConeT(m_ineq));
        }
        let p = ClarabelCsc::<f64>::zeros((n, n));

        let settings = DefaultSettingsBuilder::default()
            .verbose(self.verbose)
            .max_iter(self.max_iter)
            .time_limit(self.time_limit)
            .tol_gap_abs(self.tol_gap_abs)
            .tol_gap_rel(self.tol_gap_rel)
            .build()
            .map_err(|e| SolverError::Backend(format!("invalid Clarabel settings: {e:?}")))?;

        let mut solver = DefaultSolver::new(&p, &lp.c, &a, &b, &cones, settings)
            .map_err(|e| SolverError::Backend(format!("invalid Clarabel problem: {e:?}")))?;
        solver.solve();

        let status = solver.solution.status;
        debug!(
            ?status,
            iterations = solver.info.iterations,
            solve_time = solver.solution.solve_time,
            "clarabel finished"
        );
        check_status(status)?;

        let x = solver.solution.x.clone();
        let residual = primal_residual(lp, &x);
        if residual > tolerance {
            return Err(SolverError::Unverified {
                residual,
                tolerance,
            });
        }

        Ok(RawSolution {
            objective_value: lp.c.iter().zip(&x).map(|(c, v)| c * v).sum(),
            x: sign_split(&x),
        })
    }
}

fn check_status(status: SolverStatus) -> Result<(), SolverError> {
    match status {
        SolverStatus::Solved | SolverStatus::AlmostSolved => Ok(()),
        SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
            Err(SolverError::Infeasible)
        }
        SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
            Err(SolverError::Unbounded)
        }
        SolverStatus::MaxIterations | SolverStatus::MaxTime => Err(SolverError::MaxIterations),
        SolverStatus::NumericalError | SolverStatus::InsufficientProgress => {
            Err(SolverError::NumericalError)
        }
        other => Err(SolverError::Backend(format!("unexpected solver status {other:?}"))),
    }
}

/// Without constraints the LP is bounded only if `c` is zero.
fn solve_unconstrained(c: &[f64]) -> Result<RawSolution, SolverError> {
    if c.iter().any(|v| *v != 0.0) {
        return Err(SolverError::Unbounded);
    }
    Ok(RawSolution {
        objective_value: 0.0,
        x: vec![0.0; 2 * c.len()],
    })
}

/// Largest violation of `G x <= h` and `A x == b`, each row measured
/// relative to the largest magnitude among its coefficients.
fn primal_residual(lp: &GeneralForm, x: &[f64]) -> f64 {
    let x = DVector::from_column_slice(x);
    let ineq = scaled_violations(&lp.g, &lp.h, &x, |d| d.max(0.0));
    let eq = match (&lp.a, &lp.b) {
        (Some(a), Some(b)) => scaled_violations(a, b, &x, f64::abs),
        _ => 0.0,
    };
    ineq.max(eq)
}

fn scaled_violations(
    m: &DMatrix<f64>,
    rhs: &[f64],
    x: &DVector<f64>,
    violation: impl Fn(f64) -> f64,
) -> f64 {
    let mx = m * x;
    mx.iter()
        .zip(rhs)
        .enumerate()
        .map(|(i, (lhs, rhs))| {
            let scale = m.row(i).amax();
            let v = violation(lhs - rhs);
            if scale > 0.0 {
                v / scale
            } else {
                v
            }
        })
        .fold(0.0, f64::max)
}

/// `[max(x, 0); max(-x, 0)]`
fn sign_split(x: &[f64]) -> Vec<f64> {
    let positive = x.iter().map(|v| v.max(0.0));
    let negative = x.iter().map(|v| (-v).max(0.0));
    positive.chain(negative).collect()
}
