//! Expression simplification.
//!
//! The current pass performs no rewriting: it returns its input
//! unchanged. It exists as the seam where algebraic rules (constant
//! folding, identity elimination) would hook in, under the contract
//! that simplification never changes the value of an expression.

use crate::expr::Expr;

impl Expr {
    /// Returns an expression semantically equivalent to this one.
    ///
    /// The current implementation is the identity transform: no constant
    /// folding and no algebraic rewriting. For every expression `e` and
    /// binding `v`, `e.simplify().evaluate(&v)` equals `e.evaluate(&v)`.
    #[must_use]
    pub fn simplify(self) -> Self {
        self
    }
}
