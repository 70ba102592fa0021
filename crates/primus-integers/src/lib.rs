//! # primus-integers
//!
//! Arbitrary precision integer arithmetic for the Primus expression engine.
//!
//! This crate wraps `dashu` to provide the `Integer` scalar used for
//! literal payloads and evaluation results, including the floor-division
//! pair `div_floor`/`rem_floor` that rounds toward negative infinity.
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
