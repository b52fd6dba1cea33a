//! Core expression type for lpbridge.
//!
//! The `Expr` enum represents scalar symbolic expressions over decision
//! variables. Expressions are immutable trees that share subtrees via `Arc`.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::polynomial::{Polynomial, PolynomialLike};
use crate::canon::{LinearForm, VariableIndex};
use crate::error::Result;
use super::variable::Variable;

/// A scalar expression.
#[derive(Debug, Clone)]
pub enum Expr {
    // ========== Leaf nodes ==========
    /// A constant value.
    Constant(f64),
    /// A decision variable.
    Variable(Variable),

    // ========== Polynomial nodes ==========
    /// Addition: a + b
    Add(Arc<Expr>, Arc<Expr>),
    /// Negation: -a
    Neg(Arc<Expr>),
    /// Multiplication: a * b
    Mul(Arc<Expr>, Arc<Expr>),
    /// Integer power: a^k
    Pow(Arc<Expr>, u32),

    // ========== Other ==========
    /// Division: a / b. Polynomial only when `b` is a non-zero constant.
    Div(Arc<Expr>, Arc<Expr>),
}

impl Expr {
    /// Convert to polynomial normal form.
    ///
    /// Returns `None` when the expression is not a polynomial, i.e. it
    /// divides by something other than a non-zero constant.
    pub fn to_polynomial(&self) -> Option<Polynomial> {
        match self {
            Expr::Constant(v) => Some(Polynomial::scalar(*v)),
            Expr::Variable(v) => Some(Polynomial::variable(v.clone())),
            Expr::Add(a, b) => Some(a.to_polynomial()?.add(&b.to_polynomial()?)),
            Expr::Neg(a) => Some(a.to_polynomial()?.neg()),
            Expr::Mul(a, b) => Some(a.to_polynomial()?.mul(&b.to_polynomial()?)),
            Expr::Pow(a, k) => Some(a.to_polynomial()?.pow(*k)),
            Expr::Div(a, b) => {
                let divisor = b.to_polynomial()?.as_constant()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.to_polynomial()?.scale(1.0 / divisor))
            }
        }
    }

    /// Polynomial degree, or `None` if the expression is not polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.to_polynomial().map(|p| p.degree())
    }

    /// Check if the expression is polynomial of degree at most one.
    pub fn is_linear(&self) -> bool {
        matches!(self.degree(), Some(d) if d <= 1)
    }

    /// Simplify the expression.
    ///
    /// Polynomial expressions are rebuilt from their normal form (like terms
    /// collected, exact cancellations removed, constants folded). Other
    /// expressions have their children simplified.
    pub fn simplify(&self) -> Expr {
        if let Some(p) = self.to_polynomial() {
            return p.to_expr();
        }
        match self {
            Expr::Constant(_) | Expr::Variable(_) => self.clone(),
            Expr::Add(a, b) => Expr::Add(Arc::new(a.simplify()), Arc::new(b.simplify())),
            Expr::Neg(a) => Expr::Neg(Arc::new(a.simplify())),
            Expr::Mul(a, b) => Expr::Mul(Arc::new(a.simplify()), Arc::new(b.simplify())),
            Expr::Pow(a, k) => Expr::Pow(Arc::new(a.simplify()), *k),
            Expr::Div(a, b) => Expr::Div(Arc::new(a.simplify()), Arc::new(b.simplify())),
        }
    }

    /// Get all variables in this expression, in creation order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars.into_iter().collect()
    }

    pub(crate) fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Variable(v) => {
                vars.insert(v.clone());
            }
            Expr::Neg(a) | Expr::Pow(a, _) => a.collect_variables(vars),
            Expr::Add(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Linear form of this expression with respect to `order`.
    ///
    /// Fails with `NonlinearExpression` if the expression is not polynomial
    /// or has degree above one.
    pub fn linear_form(&self, order: &[Variable]) -> Result<LinearForm> {
        VariableIndex::new(order).extract_expr(self)
    }

    /// Raise to an integer power.
    pub fn pow(&self, exponent: u32) -> Expr {
        Expr::Pow(Arc::new(self.clone()), exponent)
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Expr::Constant(v)
    }
}

impl From<i32> for Expr {
    fn from(v: i32) -> Self {
        Expr::Constant(v as f64)
    }
}

impl From<Variable> for Expr {
    fn from(v: Variable) -> Self {
        Expr::Variable(v)
    }
}

impl From<&Variable> for Expr {
    fn from(v: &Variable) -> Self {
        Expr::Variable(v.clone())
    }
}

impl From<&Expr> for Expr {
    fn from(e: &Expr) -> Self {
        e.clone()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(v) => write!(f, "{v}"),
            Expr::Variable(v) => write!(f, "{v}"),
            Expr::Add(a, b) => write!(f, "({a} + {b})"),
            Expr::Neg(a) => write!(f, "-{a}"),
            Expr::Mul(a, b) => write!(f, "{a} * {b}"),
            Expr::Pow(a, k) => write!(f, "{a}^{k}"),
            Expr::Div(a, b) => write!(f, "{a} / {b}"),
        }
    }
}

/// Create a constant expression.
pub fn constant(value: f64) -> Expr {
    Expr::Constant(value)
}

/// Sum a sequence of expressions. The empty sum is `0`.
pub fn sum<I>(terms: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    terms
        .into_iter()
        .map(Into::into)
        .reduce(|acc, t| Expr::Add(Arc::new(acc), Arc::new(t)))
        .unwrap_or(Expr::Constant(0.0))
}

/// Inner product of a coefficient vector with a list of variables.
///
/// # Examples
///
/// ```
/// use lpbridge::expr::{dot, variables};
///
/// let x = variables(2, "x");
/// let e = dot(&[1.0, -1.0], &x);
/// assert_eq!(e.degree(), Some(1));
/// ```
pub fn dot(coeffs: &[f64], vars: &[Variable]) -> Expr {
    sum(coeffs
        .iter()
        .zip(vars)
        .map(|(c, v)| Expr::Mul(Arc::new(Expr::Constant(*c)), Arc::new(Expr::from(v)))))
}
