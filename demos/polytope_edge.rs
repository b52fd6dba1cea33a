//! Polytope Edge Example
//!
//! Every point on the edge x1 + x2 = 2 of the feasible polytope is optimal:
//!
//! minimize    -x1 - x2
//! subject to  x1 + x2 <= 2, x >= 0
//!
//! Run with `RUST_LOG=lpbridge=debug` to see the rows being assembled.

use lpbridge::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Polytope Edge ===\n");
    println!("Problem: Minimize -x1 - x2");
    println!("Subject to:");
    println!("  x1 + x2 <= 2");
    println!("  x >= 0\n");

    let x = variables(2, "x");

    println!("Solving...");
    let solution = Problem::minimize(-&x[0] - &x[1])
        .named("polytope_edge")
        .over(x.clone())
        .subject_to([(&x[0] + &x[1]).leq(2.0), x[0].geq(0.0), x[1].geq(0.0)])
        .solve()
        .expect("Failed to solve");

    println!("\nResults:");
    println!("  Optimal value: {:.4}", solution.objective_value);
    for (var, value) in solution.iter() {
        println!("  {var} = {value}");
    }
}
