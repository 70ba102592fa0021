//! Symbolic expression demonstration.
//!
//! Builds the fixed sample polynomial `(4 + 3) + (X + 1 * (X * X + 1))`,
//! renders it, exercises the subtraction and division node kinds, and
//! evaluates test expressions at concrete bindings, including the
//! division-by-zero failure path.
//!
//! Run with: cargo run --example polynomial_demo
//! Pass `--verify` to re-check the expected values.

use std::env;

use primus::prelude::*;

fn x() -> Expr {
    Expr::var()
}

fn int(n: i64) -> Expr {
    Expr::int(n)
}

/// The sample polynomial `(4 + 3) + (X + 1 * (X * X + 1))`.
fn sample_polynomial() -> Expr {
    (int(4) + int(3)) + (x() + int(1) * (x() * x() + int(1)))
}

/// The evaluation test polynomial `(2 * X - 1) + (6 / 2)`.
fn test_polynomial() -> Expr {
    (int(2) * x() - int(1)) + int(6) / int(2)
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║            Primus - Symbolic Expression Demonstration            ║");
    println!("╚══════════════════════════════════════════════════════════════════╝\n");

    let poly = sample_polynomial();
    println!("Original polynomial: {}", poly);

    subtraction_and_division_examples();
    evaluation_examples(&poly);
    division_by_zero_example();

    if env::args().any(|arg| arg == "--verify") {
        verify_expected_values();
    } else {
        println!("\nTo re-check the expected values, run with: --verify");
    }
}

fn subtraction_and_division_examples() {
    println!("\n--- Subtraction and division nodes ---");

    let difference = int(10) - int(3);
    println!("Subtraction: {}", difference);

    let quotient = int(15) / int(3);
    println!("Division: {}", quotient);
}

fn evaluation_examples(poly: &Expr) {
    println!("\n--- Evaluation ---");

    let test_poly = test_polynomial();
    println!("Test polynomial: {}", test_poly);
    match test_poly.evaluate(&Integer::new(4)) {
        Ok(value) => println!("Evaluation for X=4: {}", value),
        Err(err) => println!("Evaluation failed: {}", err),
    }

    match poly.evaluate(&Integer::new(2)) {
        Ok(value) => println!("Original polynomial evaluation for X=2: {}", value),
        Err(err) => println!("Evaluation failed: {}", err),
    }
}

fn division_by_zero_example() {
    println!("\n--- Division by zero ---");

    let bad = int(1) / (x() - x());
    println!("Evaluating {} at X=5:", bad);
    match bad.evaluate(&Integer::new(5)) {
        Ok(value) => println!("  unexpected success: {}", value),
        Err(err) => println!("  error: {}", err),
    }
}

fn verify_expected_values() {
    println!("\n--- Verifying expected values ---");

    assert_eq!(
        sample_polynomial().render(),
        "4 + 3 + X + 1 * ( X * X + 1 )"
    );
    println!("  ✓ sample polynomial renders correctly");

    assert_eq!((int(10) - int(3)).render(), "10 - 3");
    assert_eq!((int(15) / int(3)).render(), "15 / 3");
    println!("  ✓ subtraction and division render correctly");

    assert_eq!(
        test_polynomial().evaluate(&Integer::new(4)),
        Ok(Integer::new(10))
    );
    assert_eq!(
        sample_polynomial().evaluate(&Integer::new(2)),
        Ok(Integer::new(14))
    );
    println!("  ✓ evaluation matches the expected results");

    assert_eq!(
        (int(1) / int(0)).evaluate(&Integer::new(0)),
        Err(EvalError::DivisionByZero)
    );
    println!("  ✓ division by zero reports an error");

    println!("\n✓ All expected values verified!");
}
