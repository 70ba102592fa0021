//! Canonical textual rendering.
//!
//! Produces a minimally parenthesized form under standard precedence:
//! addition and subtraction are lowest, multiplication and division bind
//! tighter. Parentheses appear only where a child's grouping would
//! otherwise be lost:
//!
//! - `Add` children are never parenthesized.
//! - `Mul` and `Sub` parenthesize a child iff it is an `Add`.
//! - `Div` parenthesizes a child iff it is an `Add` or a `Sub`.
//!
//! Nested `Sub`/`Div` children stay bare even where the grouping is not
//! recoverable from the output: `1 - 2 - 3` prints identically for both
//! associations. The flat form is deliberate and pinned by tests.

use std::fmt;

use crate::expr::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var => write!(f, "X"),
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Add(lhs, rhs) => write!(f, "{} + {}", lhs, rhs),
            Expr::Mul(lhs, rhs) => {
                fmt_child(f, lhs, matches!(**lhs, Expr::Add(_, _)))?;
                write!(f, " * ")?;
                fmt_child(f, rhs, matches!(**rhs, Expr::Add(_, _)))
            }
            Expr::Sub(lhs, rhs) => {
                fmt_child(f, lhs, matches!(**lhs, Expr::Add(_, _)))?;
                write!(f, " - ")?;
                fmt_child(f, rhs, matches!(**rhs, Expr::Add(_, _)))
            }
            Expr::Div(lhs, rhs) => {
                fmt_child(f, lhs, matches!(**lhs, Expr::Add(_, _) | Expr::Sub(_, _)))?;
                write!(f, " / ")?;
                fmt_child(f, rhs, matches!(**rhs, Expr::Add(_, _) | Expr::Sub(_, _)))
            }
        }
    }
}

/// Writes a child expression, wrapped in space-padded parentheses when the
/// parent requires grouping.
fn fmt_child(f: &mut fmt::Formatter<'_>, child: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "( {} )", child)
    } else {
        write!(f, "{}", child)
    }
}

impl Expr {
    /// Renders the expression to its canonical textual form.
    ///
    /// Equivalent to `to_string`; the output is deterministic for a
    /// fixed expression.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}
