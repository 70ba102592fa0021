//! Expression evaluation.
//!
//! Reduces an expression tree to a single integer given a value for the
//! free variable. Evaluation is a depth-first structural recursion over
//! immutable data; the only failure condition is a divisor that
//! evaluates to zero.

use num_traits::Zero;
use thiserror::Error;

use primus_integers::Integer;

use crate::expr::Expr;

/// Errors that can occur during expression evaluation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A `Div` node's divisor evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl Expr {
    /// Evaluates the expression with the free variable bound to `x`.
    ///
    /// Children are evaluated before their parent combines them.
    /// Division rounds toward negative infinity: `-7 / 2` evaluates
    /// to `-4`, not `-3`.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::DivisionByZero` if any `Div` node's divisor
    /// evaluates to zero. The error aborts the entire evaluation; there
    /// is no local recovery.
    pub fn evaluate(&self, x: &Integer) -> Result<Integer, EvalError> {
        match self {
            Expr::Var => Ok(x.clone()),
            Expr::Int(value) => Ok(value.clone()),
            Expr::Add(lhs, rhs) => Ok(lhs.evaluate(x)? + rhs.evaluate(x)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.evaluate(x)? * rhs.evaluate(x)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.evaluate(x)? - rhs.evaluate(x)?),
            Expr::Div(lhs, rhs) => {
                let numerator = lhs.evaluate(x)?;
                let divisor = rhs.evaluate(x)?;
                if divisor.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(numerator.div_floor(&divisor))
            }
        }
    }
}
