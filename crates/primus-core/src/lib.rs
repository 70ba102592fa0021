//! # primus-core
//!
//! Core expression engine for the Primus symbolic expression library.
//!
//! This crate provides:
//! - A closed, recursive expression tree over one free variable (`Expr`)
//! - Minimally parenthesized textual rendering (`Display` / `render`)
//! - Exact integer evaluation with floor-division semantics (`evaluate`)
//! - An identity `simplify` pass reserved for future rewriting rules
//!
//! ## Design Principles
//!
//! - **Closed sum type**: every operation is one exhaustive match, so a
//!   new node kind cannot be added without updating rendering and
//!   evaluation
//! - **Exclusive ownership**: each node owns its children; trees are
//!   immutable after construction and safe to share read-only across
//!   threads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eval;
pub mod expr;
pub mod render;
pub mod simplify;


pub use eval::EvalError;
pub use expr::Expr;
