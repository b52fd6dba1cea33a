//! Solution of an optimization problem.

use crate::error::{LpError, Result};
use crate::expr::Variable;

/// Optimal value and point of a solved problem.
///
/// `variables[i]` is the value of the `i`-th variable of the ordering the
/// problem was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Objective value, in the problem's own sense.
    pub objective_value: f64,
    /// One value per variable of the ordering.
    pub variables: Vec<f64>,
    order: Vec<Variable>,
}

impl Solution {
    pub(crate) fn new(objective_value: f64, variables: Vec<f64>, order: Vec<Variable>) -> Self {
        Self {
            objective_value,
            variables,
            order,
        }
    }

    /// The variable ordering the values are aligned with.
    pub fn order(&self) -> &[Variable] {
        &self.order
    }

    /// Value of `var`, or `None` if it is not part of the ordering.
    pub fn value(&self, var: &Variable) -> Option<f64> {
        self.order
            .iter()
            .position(|v| v == var)
            .and_then(|i| self.variables.get(i).copied())
    }

    /// Value of `var`, returning an error if it is not part of the ordering.
    pub fn try_value(&self, var: &Variable) -> Result<f64> {
        self.value(var).ok_or_else(|| LpError::UnknownVariable {
            variable: var.clone(),
        })
    }

    /// Iterate over `(variable, value)` pairs in ordering order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, f64)> {
        self.order.iter().zip(self.variables.iter().copied())
    }
}

impl std::ops::Index<&Variable> for Solution {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the variable is not part of the ordering. Use
    /// [`Solution::value`] for a fallible lookup.
    fn index(&self, var: &Variable) -> &f64 {
        let i = self
            .order
            .iter()
            .position(|v| v == var)
            .expect("variable not in solution");
        &self.variables[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{named_variable, variables};

    #[test]
    fn test_lookup() {
        let x = variables(2, "x");
        let sol = Solution::new(-3.0, vec![2.0, 1.0], x.clone());
        assert_eq!(sol.value(&x[1]), Some(1.0));
        assert_eq!(sol[&x[0]], 2.0);
        assert_eq!(sol.iter().count(), 2);

        let stray = named_variable("stray");
        assert_eq!(sol.value(&stray), None);
        assert!(matches!(
            sol.try_value(&stray),
            Err(LpError::UnknownVariable { .. })
        ));
    }
}
