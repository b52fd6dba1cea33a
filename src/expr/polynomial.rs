//! Polynomial normal form for expressions.
//!
//! A [`Polynomial`] is a sum of monomials with real coefficients. It is the
//! form in which expressions are simplified, their degree computed, and
//! their linear part read off.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::expression::Expr;
use super::variable::Variable;

/// Capability of polynomial-like scalar expressions.
///
/// This is what the linearization layer needs from an expression: its
/// degree, its constant term, and the coefficients of its degree-one terms.
pub trait PolynomialLike {
    /// Highest total degree over all terms (0 for constants).
    fn degree(&self) -> u32;

    /// The constant term.
    fn constant(&self) -> f64;

    /// Coefficients of the degree-one monomials, in variable creation order.
    fn linear_terms(&self) -> Vec<(Variable, f64)>;
}

/// A product of variable powers, kept sorted by variable with no zero
/// exponents. The empty monomial is the constant `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Monomial(Vec<(Variable, u32)>);

impl Monomial {
    /// The constant monomial `1`.
    pub fn one() -> Self {
        Monomial(Vec::new())
    }

    /// The monomial `v`.
    pub fn variable(v: Variable) -> Self {
        Monomial(vec![(v, 1)])
    }

    /// Total degree, saturating at `u32::MAX`.
    pub fn degree(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, (_, e)| acc.saturating_add(*e))
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }

    /// The variable of a degree-one monomial.
    pub fn as_linear(&self) -> Option<&Variable> {
        match self.0.as_slice() {
            [(v, 1)] => Some(v),
            _ => None,
        }
    }

    pub fn factors(&self) -> &[(Variable, u32)] {
        &self.0
    }

    /// Product of two monomials. Exponents of shared variables add,
    /// saturating at `u32::MAX`.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut factors = Vec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            let (a, ea) = &self.0[i];
            let (b, eb) = &other.0[j];
            match a.cmp(b) {
                std::cmp::Ordering::Less => {
                    factors.push((a.clone(), *ea));
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    factors.push((b.clone(), *eb));
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    factors.push((a.clone(), ea.saturating_add(*eb)));
                    i += 1;
                    j += 1;
                }
            }
        }
        factors.extend_from_slice(&self.0[i..]);
        factors.extend_from_slice(&other.0[j..]);
        Monomial(factors)
    }

    fn to_expr(&self) -> Option<Expr> {
        self.0
            .iter()
            .map(|(v, e)| {
                let base = Expr::Variable(v.clone());
                if *e == 1 {
                    base
                } else {
                    Expr::Pow(Arc::new(base), *e)
                }
            })
            .reduce(|acc, f| Expr::Mul(Arc::new(acc), Arc::new(f)))
    }
}

/// A polynomial: monomial -> coefficient, zero coefficients dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, f64>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial.
    pub fn scalar(value: f64) -> Self {
        let mut p = Self::zero();
        p.insert(Monomial::one(), value);
        p
    }

    /// The polynomial `v`.
    pub fn variable(v: Variable) -> Self {
        let mut p = Self::zero();
        p.insert(Monomial::variable(v), 1.0);
        p
    }

    fn insert(&mut self, monomial: Monomial, coeff: f64) {
        if coeff == 0.0 {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += coeff;
                if *slot.get() == 0.0 {
                    slot.remove();
                }
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(monomial, coefficient)` pairs in monomial order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, f64)> {
        self.terms.iter().map(|(m, c)| (m, *c))
    }

    /// The constant value, if this polynomial has no variable terms.
    pub fn as_constant(&self) -> Option<f64> {
        match self.degree() {
            0 => Some(self.constant()),
            _ => None,
        }
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (m, c) in &other.terms {
            result.insert(m.clone(), *c);
        }
        result
    }

    /// Negate a polynomial.
    pub fn neg(&self) -> Polynomial {
        self.scale(-1.0)
    }

    /// Subtract `other` from `self`.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    /// Scale by a scalar.
    pub fn scale(&self, scalar: f64) -> Polynomial {
        let mut result = Polynomial::zero();
        for (m, c) in &self.terms {
            result.insert(m.clone(), c * scalar);
        }
        result
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &other.terms {
                result.insert(ma.mul(mb), ca * cb);
            }
        }
        result
    }

    /// Raise to a non-negative integer power by repeated squaring.
    pub fn pow(&self, exponent: u32) -> Polynomial {
        let mut result = Polynomial::scalar(1.0);
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Rebuild an expression tree from the normal form.
    pub fn to_expr(&self) -> Expr {
        let mut terms = self.terms.iter().map(|(m, &c)| match m.to_expr() {
            None => Expr::Constant(c),
            Some(e) if c == 1.0 => e,
            Some(e) if c == -1.0 => Expr::Neg(Arc::new(e)),
            Some(e) => Expr::Mul(Arc::new(Expr::Constant(c)), Arc::new(e)),
        });
        match terms.next() {
            None => Expr::Constant(0.0),
            Some(first) => terms.fold(first, |acc, t| Expr::Add(Arc::new(acc), Arc::new(t))),
        }
    }
}

impl PolynomialLike for Polynomial {
    fn degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    fn constant(&self) -> f64 {
        self.terms.get(&Monomial::one()).copied().unwrap_or(0.0)
    }

    fn linear_terms(&self) -> Vec<(Variable, f64)> {
        self.terms
            .iter()
            .filter_map(|(m, c)| m.as_linear().map(|v| (v.clone(), *c)))
            .collect()
    }
}

impl PolynomialLike for Variable {
    fn degree(&self) -> u32 {
        1
    }

    fn constant(&self) -> f64 {
        0.0
    }

    fn linear_terms(&self) -> Vec<(Variable, f64)> {
        vec![(self.clone(), 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::named_variable;

    #[test]
    fn test_monomial_mul_merges_exponents() {
        let x = named_variable("x");
        let y = named_variable("y");
        let xy = Monomial::variable(x.clone()).mul(&Monomial::variable(y.clone()));
        let x2y = xy.mul(&Monomial::variable(x.clone()));
        assert_eq!(x2y.degree(), 3);
        assert_eq!(x2y.factors(), &[(x, 2), (y, 1)]);
    }

    #[test]
    fn test_cancellation_drops_degree() {
        let x = named_variable("x");
        let px = Polynomial::variable(x.clone());
        let sq = px.mul(&px);
        let p = sq.add(&px).sub(&sq);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.linear_terms(), vec![(x, 1.0)]);
    }

    #[test]
    fn test_constant_and_linear_terms() {
        let x = named_variable("x");
        let y = named_variable("y");
        let p = Polynomial::variable(x.clone())
            .scale(3.0)
            .add(&Polynomial::variable(y.clone()).scale(-2.0))
            .add(&Polynomial::scalar(5.0));
        assert_eq!(p.degree(), 1);
        assert_eq!(p.constant(), 5.0);
        assert_eq!(p.linear_terms(), vec![(x, 3.0), (y, -2.0)]);
    }

    #[test]
    fn test_pow() {
        let x = named_variable("x");
        let p = Polynomial::variable(x).add(&Polynomial::scalar(1.0)).pow(2);
        // x^2 + 2x + 1
        assert_eq!(p.degree(), 2);
        assert_eq!(p.constant(), 1.0);
        assert_eq!(p.linear_terms()[0].1, 2.0);
        assert_eq!(Polynomial::scalar(7.0).pow(0), Polynomial::scalar(1.0));
        assert_eq!(Polynomial::scalar(2.0).pow(10).constant(), 1024.0);
    }

    #[test]
    fn test_huge_exponents_saturate() {
        let x = named_variable("x");
        let p = Polynomial::variable(x.clone()).pow(u32::MAX);
        assert_eq!(p.degree(), u32::MAX);

        let a = Monomial(vec![(x.clone(), u32::MAX - 1)]);
        let b = Monomial(vec![(x, 5)]);
        assert_eq!(a.mul(&b).degree(), u32::MAX);
    }

    #[test]
    fn test_to_expr_round_trips_through_normal_form() {
        let x = named_variable("x");
        let y = named_variable("y");
        let p = Polynomial::variable(x.clone())
            .mul(&Polynomial::variable(y))
            .scale(2.0)
            .sub(&Polynomial::variable(x))
            .add(&Polynomial::scalar(4.0));
        assert_eq!(p.to_expr().to_polynomial(), Some(p));
        assert!(Polynomial::zero().to_expr().to_polynomial().unwrap().is_zero());
    }
}
