//! Linear-form extraction.
//!
//! Reads the dense coefficient vector and the constant term of a
//! polynomial-like expression relative to a fixed variable ordering.

use std::collections::HashMap;

use crate::error::{LpError, Result};
use crate::expr::{Expr, PolynomialLike, VarId, Variable};

/// Linear part of an expression: `coeffs · x + constant`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearForm {
    /// One coefficient per variable of the ordering.
    pub coeffs: Vec<f64>,
    /// Constant term.
    pub constant: f64,
}

/// Column lookup for a fixed variable ordering.
///
/// Built once per problem so that every extraction in a build session uses
/// the same columns. If a variable appears more than once in the ordering,
/// its first position is its column.
#[derive(Debug, Clone)]
pub struct VariableIndex {
    order: Vec<Variable>,
    columns: HashMap<VarId, usize>,
}

impl VariableIndex {
    pub fn new(order: &[Variable]) -> Self {
        let mut columns = HashMap::with_capacity(order.len());
        for (col, v) in order.iter().enumerate() {
            columns.entry(v.id()).or_insert(col);
        }
        Self {
            order: order.to_vec(),
            columns,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The ordering this index was built from.
    pub fn variables(&self) -> &[Variable] {
        &self.order
    }

    /// Column of `v`, if it is part of the ordering.
    pub fn column(&self, v: &Variable) -> Option<usize> {
        self.columns.get(&v.id()).copied()
    }

    /// Extract the linear form of `expr`.
    ///
    /// Fails with `NonlinearExpression` if `expr` has degree above one and
    /// with `UnknownVariable` if a linear term uses a variable outside the
    /// ordering.
    pub fn extract<P: PolynomialLike + ?Sized>(&self, expr: &P) -> Result<LinearForm> {
        let degree = expr.degree();
        if degree > 1 {
            return Err(LpError::NonlinearExpression {
                degree: Some(degree),
            });
        }

        let mut coeffs = vec![0.0; self.len()];
        for (variable, coeff) in expr.linear_terms() {
            match self.column(&variable) {
                Some(col) => coeffs[col] += coeff,
                None => return Err(LpError::UnknownVariable { variable }),
            }
        }

        Ok(LinearForm {
            coeffs,
            constant: expr.constant(),
        })
    }

    /// Extract the linear form of an expression tree.
    pub fn extract_expr(&self, expr: &Expr) -> Result<LinearForm> {
        let poly = expr
            .to_polynomial()
            .ok_or(LpError::NonlinearExpression { degree: None })?;
        self.extract(&poly)
    }
}

/// Extract the linear form of `expr` with respect to `order`.
///
/// `coeffs[i]` is the coefficient of `order[i]`.
///
/// # Examples
///
/// ```
/// use lpbridge::canon::linear_form;
/// use lpbridge::expr::variables;
///
/// let x = variables(2, "x");
/// let p = (3.0 * &x[1] - 1.0).to_polynomial().unwrap();
/// let form = linear_form(&p, &x).unwrap();
/// assert_eq!(form.coeffs, vec![0.0, 3.0]);
/// assert_eq!(form.constant, -1.0);
/// ```
pub fn linear_form<P: PolynomialLike + ?Sized>(expr: &P, order: &[Variable]) -> Result<LinearForm> {
    VariableIndex::new(order).extract(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{constant, named_variable, variables};

    #[test]
    fn test_extract_follows_ordering() {
        let x = variables(3, "x");
        let e = 2.0 * &x[2] - &x[0] + 7.0;
        let index = VariableIndex::new(&x);
        let form = index.extract_expr(&e).unwrap();
        assert_eq!(form.coeffs, vec![-1.0, 0.0, 2.0]);
        assert_eq!(form.constant, 7.0);

        let reversed: Vec<_> = x.iter().rev().cloned().collect();
        let form = VariableIndex::new(&reversed).extract_expr(&e).unwrap();
        assert_eq!(form.coeffs, vec![2.0, 0.0, -1.0]);
    }

    #[test]
    fn test_extract_constant() {
        let x = variables(2, "x");
        let form = VariableIndex::new(&x).extract_expr(&constant(4.5)).unwrap();
        assert_eq!(form.coeffs, vec![0.0, 0.0]);
        assert_eq!(form.constant, 4.5);
    }

    #[test]
    fn test_extract_variable_directly() {
        let x = variables(2, "x");
        let form = linear_form(&x[1], &x).unwrap();
        assert_eq!(form.coeffs, vec![0.0, 1.0]);
    }

    #[test]
    fn test_unknown_variable_rejected() {
        let x = variables(2, "x");
        let stray = named_variable("stray");
        let e = &x[0] + &stray;
        let err = VariableIndex::new(&x).extract_expr(&e).unwrap_err();
        match err {
            LpError::UnknownVariable { variable } => assert_eq!(variable, stray),
            other => panic!("Expected UnknownVariable, got {other}"),
        }
    }

    #[test]
    fn test_cancelled_unknown_variable_is_fine() {
        let x = variables(1, "x");
        let stray = named_variable("stray");
        let e = &x[0] + &stray - &stray;
        assert!(VariableIndex::new(&x).extract_expr(&e).is_ok());
    }

    #[test]
    fn test_nonlinear_rejected() {
        let x = variables(2, "x");
        let err = VariableIndex::new(&x)
            .extract_expr(&(&x[0] * &x[1]))
            .unwrap_err();
        assert!(matches!(err, LpError::NonlinearExpression { degree: Some(2) }));

        let err = VariableIndex::new(&x)
            .extract_expr(&(&x[0] / &x[1]))
            .unwrap_err();
        assert!(matches!(err, LpError::NonlinearExpression { degree: None }));
    }

    #[test]
    fn test_duplicate_in_ordering_uses_first_column() {
        let x = variables(2, "x");
        let order = vec![x[0].clone(), x[1].clone(), x[0].clone()];
        let index = VariableIndex::new(&order);
        assert_eq!(index.column(&x[0]), Some(0));
        let form = index.extract_expr(&Expr::from(&x[0])).unwrap();
        assert_eq!(form.coeffs, vec![1.0, 0.0, 0.0]);
    }
}
