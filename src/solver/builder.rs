//! Simplex builder: accumulates the matrices of an LP in general form
//!
//! ```text
//! minimize    cᵀ x
//! subject to  G x <= h
//!             A x == b
//! ```
//!
//! for a fixed, ordered set of variables.

use nalgebra::DMatrix;
use tracing::debug;

use super::system::ConstraintSystem;
use crate::canon::{normalize_with, RowKind, VariableIndex};
use crate::constraints::Constraint;
use crate::error::{LpError, Result};
use crate::expr::Variable;
use crate::problem::{Objective, ObjectiveSense};

/// Dense LP in general form, as handed to an [`LpBackend`](super::LpBackend).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralForm {
    /// Objective coefficients (minimized).
    pub c: Vec<f64>,
    /// Inequality matrix.
    pub g: DMatrix<f64>,
    /// Inequality bounds.
    pub h: Vec<f64>,
    /// Equality matrix, `None` when there are no equality rows.
    pub a: Option<DMatrix<f64>>,
    /// Equality right-hand side, `None` when there are no equality rows.
    pub b: Option<Vec<f64>>,
}

impl GeneralForm {
    /// Number of variables before sign splitting.
    pub fn num_variables(&self) -> usize {
        self.c.len()
    }
}

/// Accumulates `G, h`, `A, b` and `c` for one problem.
///
/// Each accepted constraint adds exactly one row, in insertion order. A
/// rejected constraint or objective leaves the builder unchanged.
#[derive(Debug, Clone)]
pub struct SimplexBuilder {
    index: VariableIndex,
    inequalities: ConstraintSystem,
    equalities: ConstraintSystem,
    c: Vec<f64>,
    objective_offset: f64,
    maximize: bool,
}

impl SimplexBuilder {
    /// Create a builder for the given variable ordering.
    pub fn new(order: &[Variable]) -> Self {
        let n = order.len();
        Self {
            index: VariableIndex::new(order),
            inequalities: ConstraintSystem::new(n),
            equalities: ConstraintSystem::new(n),
            c: vec![0.0; n],
            objective_offset: 0.0,
            maximize: false,
        }
    }

    /// Normalize `constraint` and append its row.
    pub fn add_constraint(&mut self, constraint: &Constraint) -> Result<()> {
        let normalized = normalize_with(constraint, &self.index)?;
        match normalized.kind {
            RowKind::Inequality => {
                self.inequalities.push(normalized.row)?;
                debug!(row = self.inequalities.nrows() - 1, "added inequality row");
            }
            RowKind::Equality => {
                self.equalities.push(normalized.row)?;
                debug!(row = self.equalities.nrows() - 1, "added equality row");
            }
        }
        Ok(())
    }

    /// Add constraints in order, stopping at the first failure.
    pub fn add_constraints<'a, I>(&mut self, constraints: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Constraint>,
    {
        for (i, constraint) in constraints.into_iter().enumerate() {
            self.add_constraint(constraint).inspect_err(|err| {
                debug!(constraint = i, error = %err, "constraint rejected");
            })?;
        }
        Ok(())
    }

    /// Set the objective vector. A later call replaces an earlier one.
    ///
    /// Maximization is turned into minimization by negating `c`.
    pub fn add_objective(&mut self, objective: &Objective) -> Result<()> {
        let maximize = match objective.sense {
            ObjectiveSense::Minimize => false,
            ObjectiveSense::Maximize => true,
            sense @ ObjectiveSense::Find => return Err(LpError::UnsupportedObjectiveSense(sense)),
        };

        let form = self.index.extract_expr(&objective.expression)?;
        self.c = if maximize {
            form.coeffs.iter().map(|v| -v).collect()
        } else {
            form.coeffs
        };
        self.objective_offset = form.constant;
        self.maximize = maximize;
        debug!(sense = %objective.sense, "set objective");
        Ok(())
    }

    /// The variable ordering.
    pub fn variables(&self) -> &[Variable] {
        self.index.variables()
    }

    pub fn num_variables(&self) -> usize {
        self.index.len()
    }

    pub fn num_inequalities(&self) -> usize {
        self.inequalities.nrows()
    }

    pub fn num_equalities(&self) -> usize {
        self.equalities.nrows()
    }

    /// Objective vector (already negated for maximization).
    pub fn c(&self) -> &[f64] {
        &self.c
    }

    /// Inequality matrix `G`.
    pub fn g(&self) -> DMatrix<f64> {
        self.inequalities.to_matrix()
    }

    /// Inequality bounds `h`.
    pub fn h(&self) -> &[f64] {
        self.inequalities.rhs()
    }

    /// Equality matrix `A`.
    pub fn a(&self) -> DMatrix<f64> {
        self.equalities.to_matrix()
    }

    /// Equality right-hand side `b`.
    pub fn b(&self) -> &[f64] {
        self.equalities.rhs()
    }

    /// The inequality system.
    pub fn inequalities(&self) -> &ConstraintSystem {
        &self.inequalities
    }

    /// The equality system.
    pub fn equalities(&self) -> &ConstraintSystem {
        &self.equalities
    }

    /// Map the minimized value `cᵀx` back to the objective as stated: undo
    /// the maximization sign flip and add the objective's constant term.
    pub fn objective_value(&self, minimized: f64) -> f64 {
        let value = if self.maximize { -minimized } else { minimized };
        value + self.objective_offset
    }

    /// Snapshot of the assembled LP.
    pub fn general_form(&self) -> GeneralForm {
        let (a, b) = if self.equalities.is_empty() {
            (None, None)
        } else {
            (Some(self.a()), Some(self.b().to_vec()))
        };
        GeneralForm {
            c: self.c.clone(),
            g: self.g(),
            h: self.h().to_vec(),
            a,
            b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintExt;
    use crate::expr::{named_variable, variables};

    #[test]
    fn test_rows_follow_insertion_order() {
        let x = variables(2, "x");
        let mut builder = SimplexBuilder::new(&x);
        builder.add_constraint(&x[0].leq(2.0)).unwrap();
        builder.add_constraint(&x[1].leq(1.0)).unwrap();
        builder.add_constraint(&x[0].geq(0.0)).unwrap();
        builder.add_constraint(&x[1].geq(0.0)).unwrap();

        let g = builder.g();
        assert_eq!(g.shape(), (4, 2));
        assert_eq!(g.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 0.0]);
        assert_eq!(g.row(3).iter().copied().collect::<Vec<_>>(), vec![0.0, -1.0]);
        assert_eq!(builder.h(), &[2.0, 1.0, 0.0, 0.0]);
        assert_eq!(builder.num_equalities(), 0);
    }

    #[test]
    fn test_equality_goes_to_a() {
        let x = variables(2, "x");
        let mut builder = SimplexBuilder::new(&x);
        builder.add_constraint(&(&x[0] + &x[1]).equals(3.0)).unwrap();
        assert_eq!(builder.num_inequalities(), 0);
        assert_eq!(builder.num_equalities(), 1);
        let lp = builder.general_form();
        assert_eq!(lp.b, Some(vec![3.0]));
        assert_eq!(lp.a.map(|a| a.shape()), Some((1, 2)));
        assert_eq!(lp.g.shape(), (0, 2));
    }

    #[test]
    fn test_rejected_constraint_leaves_state() {
        let x = variables(2, "x");
        let mut builder = SimplexBuilder::new(&x);
        builder.add_constraint(&x[0].leq(1.0)).unwrap();
        let before = builder.general_form();

        assert!(builder.add_constraint(&(&x[0] * &x[1]).leq(1.0)).is_err());
        let stray = named_variable("stray");
        assert!(builder.add_constraint(&stray.leq(1.0)).is_err());

        assert_eq!(builder.general_form(), before);
    }

    #[test]
    fn test_add_constraints_fails_fast() {
        let x = variables(2, "x");
        let constraints = vec![
            x[0].leq(1.0),
            (&x[0] * &x[0]).leq(1.0),
            x[1].leq(1.0),
        ];
        let mut builder = SimplexBuilder::new(&x);
        let err = builder.add_constraints(&constraints).unwrap_err();
        assert!(matches!(err, LpError::NonlinearConstraint(_)));
        assert_eq!(builder.num_inequalities(), 1);
    }

    #[test]
    fn test_objective_sense() {
        let x = variables(2, "x");
        let expr = 3.0 * &x[0] - &x[1] + 10.0;
        let mut builder = SimplexBuilder::new(&x);

        builder.add_objective(&Objective::minimize(expr.clone())).unwrap();
        assert_eq!(builder.c(), &[3.0, -1.0]);
        assert_eq!(builder.objective_value(5.0), 15.0);

        builder.add_objective(&Objective::maximize(expr.clone())).unwrap();
        assert_eq!(builder.c(), &[-3.0, 1.0]);
        assert_eq!(builder.objective_value(-5.0), 15.0);

        let err = builder
            .add_objective(&Objective::new(expr, ObjectiveSense::Find))
            .unwrap_err();
        assert!(matches!(
            err,
            LpError::UnsupportedObjectiveSense(ObjectiveSense::Find)
        ));
        assert_eq!(builder.c(), &[-3.0, 1.0]);
    }

    #[test]
    fn test_nonlinear_objective_rejected() {
        let x = variables(1, "x");
        let mut builder = SimplexBuilder::new(&x);
        let err = builder
            .add_objective(&Objective::minimize(&x[0] * &x[0]))
            .unwrap_err();
        assert!(matches!(err, LpError::NonlinearExpression { degree: Some(2) }));
        assert_eq!(builder.c(), &[0.0]);
    }
}
