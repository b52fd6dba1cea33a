//! Problem definition and solving API.
//!
//! A `Problem` bundles an ordered variable list, a list of constraints and a
//! single objective. Use the builder to construct problems:
//! ```ignore
//! let solution = Problem::minimize(objective)
//!     .subject_to([constraint1, constraint2])
//!     .solve()?;
//! ```
//!
//! The variable ordering fixes the column of every variable in the assembled
//! matrices and the position of its value in the solution. When no ordering
//! is given, variables are taken from the objective and constraints in
//! creation order.

use std::collections::BTreeSet;
use std::fmt;

use crate::constraints::Constraint;
use crate::error::Result;
use crate::expr::{Expr, Variable};
use crate::solver::{solve, Settings, Solution};

/// Optimization sense of an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectiveSense {
    /// Minimize the expression.
    Minimize,
    /// Maximize the expression (internally converted to minimization).
    Maximize,
    /// Feasibility only. Not supported by the simplex builder.
    Find,
}

impl fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectiveSense::Minimize => "minimize",
            ObjectiveSense::Maximize => "maximize",
            ObjectiveSense::Find => "find",
        })
    }
}

/// Objective of an optimization problem.
#[derive(Debug, Clone)]
pub struct Objective {
    /// The expression being optimized.
    pub expression: Expr,
    /// Whether to minimize or maximize it.
    pub sense: ObjectiveSense,
}

impl Objective {
    pub fn new(expression: impl Into<Expr>, sense: ObjectiveSense) -> Self {
        Self {
            expression: expression.into(),
            sense,
        }
    }

    pub fn minimize(expression: impl Into<Expr>) -> Self {
        Self::new(expression, ObjectiveSense::Minimize)
    }

    pub fn maximize(expression: impl Into<Expr>) -> Self {
        Self::new(expression, ObjectiveSense::Maximize)
    }

    /// Get the expression being optimized.
    pub fn expr(&self) -> &Expr {
        &self.expression
    }
}

/// A linear optimization problem.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Display name.
    pub name: String,
    /// The variable ordering.
    pub variables: Vec<Variable>,
    /// The constraints, in insertion order.
    pub constraints: Vec<Constraint>,
    /// The objective.
    pub objective: Objective,
}

impl Problem {
    /// Create a minimization problem.
    pub fn minimize(expr: impl Into<Expr>) -> ProblemBuilder {
        ProblemBuilder::new(Objective::minimize(expr))
    }

    /// Create a maximization problem.
    pub fn maximize(expr: impl Into<Expr>) -> ProblemBuilder {
        ProblemBuilder::new(Objective::maximize(expr))
    }

    /// Create a problem from an arbitrary objective.
    pub fn with_objective(objective: Objective) -> ProblemBuilder {
        ProblemBuilder::new(objective)
    }

    /// Get all variables used by the objective and constraints, in creation
    /// order.
    pub fn variables_in_use(&self) -> Vec<Variable> {
        collect_variables(&self.objective, &self.constraints)
    }

    /// Solve the problem with default settings.
    pub fn solve(&self) -> Result<Solution> {
        self.solve_with(Settings::default())
    }

    /// Solve the problem with custom settings.
    pub fn solve_with(&self, settings: Settings) -> Result<Solution> {
        solve(self, &settings)
    }
}

fn collect_variables(objective: &Objective, constraints: &[Constraint]) -> Vec<Variable> {
    let mut vars: BTreeSet<Variable> = objective.expression.variables().into_iter().collect();
    for c in constraints {
        vars.extend(c.variables());
    }
    vars.into_iter().collect()
}

/// Builder for constructing problems.
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    name: String,
    variables: Option<Vec<Variable>>,
    objective: Objective,
    constraints: Vec<Constraint>,
}

impl ProblemBuilder {
    fn new(objective: Objective) -> Self {
        Self {
            name: String::from("problem"),
            variables: None,
            objective,
            constraints: Vec::new(),
        }
    }

    /// Set the problem name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Fix the variable ordering.
    pub fn over(mut self, variables: impl IntoIterator<Item = Variable>) -> Self {
        self.variables = Some(variables.into_iter().collect());
        self
    }

    /// Add constraints to the problem.
    pub fn subject_to(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Add a single constraint.
    pub fn constraint(mut self, c: impl Into<Constraint>) -> Self {
        self.constraints.push(c.into());
        self
    }

    /// Build the problem.
    pub fn build(self) -> Problem {
        let variables = self
            .variables
            .unwrap_or_else(|| collect_variables(&self.objective, &self.constraints));
        Problem {
            name: self.name,
            variables,
            constraints: self.constraints,
            objective: self.objective,
        }
    }

    /// Build and solve the problem with default settings.
    pub fn solve(self) -> Result<Solution> {
        self.build().solve()
    }

    /// Build and solve the problem with custom settings.
    pub fn solve_with(self, settings: Settings) -> Result<Solution> {
        self.build().solve_with(settings)
    }
}
