//! # Primus
//!
//! A minimal symbolic expression engine over a single free variable.
//!
//! Primus models arithmetic expressions as an immutable tree of six node
//! kinds and defines three operations over it:
//!
//! - **Render**: minimally parenthesized, unambiguous textual form
//! - **Evaluate**: exact integer reduction at a variable binding, with
//!   floor-division semantics
//! - **Simplify**: an identity pass reserved for future rewriting rules
//!
//! ## Quick Start
//!
//! ```rust
//! use primus::prelude::*;
//!
//! let expr = (Expr::int(2) * Expr::var() - Expr::int(1)) + Expr::int(6) / Expr::int(2);
//! assert_eq!(expr.render(), "2 * X - 1 + 6 / 2");
//! assert_eq!(expr.evaluate(&Integer::new(4)), Ok(Integer::new(10)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use primus_core as core;
pub use primus_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use primus_core::{EvalError, Expr};
    pub use primus_integers::Integer;
}
