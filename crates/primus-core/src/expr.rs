//! Expression node types.
//!
//! This module defines the recursive expression tree and its
//! construction surface.

use std::ops::{Add, Div, Mul, Sub};

use primus_integers::Integer;

/// A node in the arithmetic expression tree.
///
/// The tree is a closed sum type over six node kinds. Each binary node
/// exclusively owns its children, so trees are finite, acyclic, and
/// immutable after construction. Rendering and evaluation dispatch with
/// one exhaustive match each, so a new variant cannot be added without
/// handling it everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    // === Atoms ===
    /// The single free variable, rendered `X`.
    Var,

    /// An arbitrary precision integer constant.
    Int(Integer),

    // === Compound Expressions ===
    /// Sum of two sub-expressions.
    Add(Box<Expr>, Box<Expr>),

    /// Product of two sub-expressions.
    Mul(Box<Expr>, Box<Expr>),

    /// Difference, left minus right.
    Sub(Box<Expr>, Box<Expr>),

    /// Floor division, left over right.
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a reference to the free variable.
    #[must_use]
    pub fn var() -> Self {
        Expr::Var
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn int(value: impl Into<Integer>) -> Self {
        Expr::Int(value.into())
    }

    /// Creates a sum node.
    #[must_use]
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a product node.
    #[must_use]
    pub fn mul(lhs: Self, rhs: Self) -> Self {
        Expr::Mul(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a difference node.
    #[must_use]
    pub fn sub(lhs: Self, rhs: Self) -> Self {
        Expr::Sub(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a floor-division node.
    ///
    /// Construction never validates the divisor; a divisor that evaluates
    /// to zero surfaces as an error at evaluation time.
    #[must_use]
    pub fn div(lhs: Self, rhs: Self) -> Self {
        Expr::Div(Box::new(lhs), Box::new(rhs))
    }

    /// Returns true if this node is an atom (no children).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Var | Expr::Int(_))
    }

    /// Returns true if the free variable occurs anywhere in the tree.
    #[must_use]
    pub fn contains_var(&self) -> bool {
        match self {
            Expr::Var => true,
            Expr::Int(_) => false,
            Expr::Add(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Div(lhs, rhs) => lhs.contains_var() || rhs.contains_var(),
        }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Var | Expr::Int(_) => 1,
            Expr::Add(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Div(lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }
}

// Operator overloads build the corresponding node, so trees compose with
// ordinary arithmetic syntax: `a * b + c` builds `Add(Mul(a, b), c)`.

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}
