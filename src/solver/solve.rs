//! Solve orchestration: problem -> matrices -> LP routine -> solution.

use tracing::{info, warn};

use super::backend::LpBackend;
use super::builder::SimplexBuilder;
use super::clarabel::ClarabelBackend;
use super::settings::Settings;
use super::solution::Solution;
use crate::error::{Result, SolverError};
use crate::problem::Problem;

/// Assemble the matrices of `problem`.
///
/// Constraints are added in order; the first rejected constraint aborts the
/// build.
pub fn build(problem: &Problem) -> Result<SimplexBuilder> {
    let mut builder = SimplexBuilder::new(&problem.variables);
    builder.add_constraints(&problem.constraints)?;
    builder.add_objective(&problem.objective)?;
    Ok(builder)
}

/// Solve `problem` with the Clarabel backend.
pub fn solve(problem: &Problem, settings: &Settings) -> Result<Solution> {
    solve_with_backend(problem, settings, &ClarabelBackend::new(settings))
}

/// Solve `problem` with an arbitrary LP backend.
pub fn solve_with_backend<B: LpBackend + ?Sized>(
    problem: &Problem,
    settings: &Settings,
    backend: &B,
) -> Result<Solution> {
    let builder = build(problem)?;
    let lp = builder.general_form();
    let n = lp.num_variables();
    info!(
        problem = %problem.name,
        variables = n,
        inequalities = builder.num_inequalities(),
        equalities = builder.num_equalities(),
        tolerance = settings.tolerance,
        "solving"
    );

    let raw = backend
        .simplex(&lp, settings.tolerance)
        .inspect_err(|err| warn!(problem = %problem.name, error = %err, "LP solve failed"))?;
    let variables = fold_sign_split(&raw.x, n)?;
    let objective_value = builder.objective_value(raw.objective_value);
    info!(problem = %problem.name, objective_value, "solved");

    Ok(Solution::new(
        objective_value,
        variables,
        problem.variables.clone(),
    ))
}

/// Recover one signed value per variable from a sign-split vector:
/// `x[i] = round_ties_even(raw[i] - raw[i + n])`.
///
/// # Examples
///
/// ```
/// use lpbridge::solver::fold_sign_split;
///
/// let x = fold_sign_split(&[3.0, 0.0, 0.0, 1.0, 7.0], 2).unwrap();
/// assert_eq!(x, vec![3.0, -1.0]);
/// ```
pub fn fold_sign_split(raw: &[f64], n: usize) -> std::result::Result<Vec<f64>, SolverError> {
    if raw.len() < 2 * n {
        return Err(SolverError::MalformedSolution {
            expected: 2 * n,
            got: raw.len(),
        });
    }
    Ok((0..n)
        .map(|i| (raw[i] - raw[i + n]).round_ties_even())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::constraints::ConstraintExt;
    use crate::error::LpError;
    use crate::expr::variables;
    use crate::solver::{GeneralForm, RawSolution};

    /// Records the LP it is given and replays a canned answer.
    struct Canned {
        answer: std::result::Result<RawSolution, SolverError>,
        seen: RefCell<Option<(GeneralForm, f64)>>,
    }

    impl Canned {
        fn new(answer: std::result::Result<RawSolution, SolverError>) -> Self {
            Self {
                answer,
                seen: RefCell::new(None),
            }
        }
    }

    impl LpBackend for Canned {
        fn simplex(
            &self,
            lp: &GeneralForm,
            tolerance: f64,
        ) -> std::result::Result<RawSolution, SolverError> {
            *self.seen.borrow_mut() = Some((lp.clone(), tolerance));
            self.answer.clone()
        }
    }

    #[test]
    fn test_fold_ties_to_even() {
        assert_eq!(fold_sign_split(&[2.5, 0.0, 0.0, 0.5], 2).unwrap(), vec![2.0, -0.0]);
        assert_eq!(fold_sign_split(&[1.4999, 3.5, 0.0, 0.0], 2).unwrap(), vec![1.0, 4.0]);
        assert_eq!(fold_sign_split(&[], 0).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_fold_rejects_short_vector() {
        assert_eq!(
            fold_sign_split(&[1.0, 2.0, 3.0], 2),
            Err(SolverError::MalformedSolution {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn test_orchestration_with_canned_backend() {
        let x = variables(2, "x");
        let problem = Problem::maximize(&x[0] + &x[1] + 1.0)
            .over(x.clone())
            .subject_to([(&x[0] + &x[1]).leq(2.0)])
            .build();
        let backend = Canned::new(Ok(RawSolution {
            objective_value: -2.0,
            x: vec![2.0, 0.0, 0.0, 0.0, 0.0],
        }));
        let settings = Settings::default().with_tolerance(0.5);

        let solution = solve_with_backend(&problem, &settings, &backend).unwrap();
        assert_eq!(solution.variables, vec![2.0, 0.0]);
        assert_eq!(solution.objective_value, 3.0);

        let (lp, tolerance) = backend.seen.borrow().clone().unwrap();
        assert_eq!(tolerance, 0.5);
        assert_eq!(lp.c, vec![-1.0, -1.0]);
        assert_eq!(lp.h, vec![2.0]);
        assert!(lp.a.is_none());
    }

    #[test]
    fn test_backend_failure_propagates() {
        let x = variables(1, "x");
        let problem = Problem::minimize(&x[0]).subject_to([x[0].geq(0.0)]).build();
        let backend = Canned::new(Err(SolverError::Infeasible));
        let err = solve_with_backend(&problem, &Settings::default(), &backend).unwrap_err();
        assert!(matches!(err, LpError::Solver(SolverError::Infeasible)));
    }

    #[test]
    fn test_build_failure_skips_backend() {
        let x = variables(2, "x");
        let problem = Problem::minimize(&x[0])
            .subject_to([(&x[0] * &x[1]).leq(1.0)])
            .build();
        let backend = Canned::new(Err(SolverError::Infeasible));
        let err = solve_with_backend(&problem, &Settings::default(), &backend).unwrap_err();
        assert!(matches!(err, LpError::NonlinearConstraint(_)));
        assert!(backend.seen.borrow().is_none());
    }
}
