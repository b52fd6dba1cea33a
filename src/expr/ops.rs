//! Operator overloading for expressions and variables.
//!
//! Any operand convertible into [`Expr`] works on the right-hand side, so
//! `&x + 1.0`, `2.0 * &x`, `x.clone() - &y` and `&e * &e` all build trees.

use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use super::expression::Expr;
use super::variable::Variable;

fn make_add(a: Expr, b: Expr) -> Expr {
    Expr::Add(Arc::new(a), Arc::new(b))
}

fn make_sub(a: Expr, b: Expr) -> Expr {
    Expr::Add(Arc::new(a), Arc::new(Expr::Neg(Arc::new(b))))
}

fn make_mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(Arc::new(a), Arc::new(b))
}

fn make_div(a: Expr, b: Expr) -> Expr {
    Expr::Div(Arc::new(a), Arc::new(b))
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $make:ident) => {
        impl<R: Into<Expr>> $op<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                $make(self, rhs.into())
            }
        }

        impl<R: Into<Expr>> $op<R> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                $make(self.clone(), rhs.into())
            }
        }

        impl<R: Into<Expr>> $op<R> for Variable {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                $make(Expr::Variable(self), rhs.into())
            }
        }

        impl<R: Into<Expr>> $op<R> for &Variable {
            type Output = Expr;

            fn $method(self, rhs: R) -> Expr {
                $make(Expr::Variable(self.clone()), rhs.into())
            }
        }

        // Scalar on the left
        impl $op<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                $make(Expr::Constant(self), rhs)
            }
        }

        impl $op<&Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Expr {
                $make(Expr::Constant(self), rhs.clone())
            }
        }

        impl $op<Variable> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Variable) -> Expr {
                $make(Expr::Constant(self), Expr::Variable(rhs))
            }
        }

        impl $op<&Variable> for f64 {
            type Output = Expr;

            fn $method(self, rhs: &Variable) -> Expr {
                $make(Expr::Constant(self), Expr::Variable(rhs.clone()))
            }
        }
    };
}

impl_binary_op!(Add, add, make_add);
impl_binary_op!(Sub, sub, make_sub);
impl_binary_op!(Mul, mul, make_mul);
impl_binary_op!(Div, div, make_div);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(self))
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(self.clone()))
    }
}

impl Neg for Variable {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(Expr::Variable(self)))
    }
}

impl Neg for &Variable {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Arc::new(Expr::Variable(self.clone())))
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{named_variable, PolynomialLike};

    #[test]
    fn test_mixed_operands() {
        let x = named_variable("x");
        let y = named_variable("y");
        let e = 2.0 * &x - &y + 1.0;
        let p = e.to_polynomial().unwrap();
        assert_eq!(p.linear_terms(), vec![(x.clone(), 2.0), (y.clone(), -1.0)]);
        assert_eq!(p.constant(), 1.0);

        let e = -&x / 4.0;
        assert_eq!(e.to_polynomial().unwrap().linear_terms(), vec![(x, -0.25)]);
    }

    #[test]
    fn test_product_of_variables() {
        let x = named_variable("x");
        let y = named_variable("y");
        assert_eq!((x.clone() * y.clone()).degree(), Some(2));
        assert_eq!((&x * 3.0).degree(), Some(1));
        assert_eq!((&(&x + 1.0) * &(&y - 1.0)).degree(), Some(2));
    }
}
