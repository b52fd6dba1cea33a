//! Production Planning Example
//!
//! Maximize profit = 3*x1 + 2*x2 + 5*x3
//! subject to:
//!   2*x1 + x2 + 3*x3 <= 100  (resource 1)
//!   x1 + 2*x2 + x3 <= 80     (resource 2)
//!   x >= 0
//!
//! The resource limits are written as one vector constraint and split into
//! scalar rows before building the problem.

use lpbridge::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Production Plan ===\n");

    let x = variables(3, "x");

    let usage = vec![dot(&[2.0, 1.0, 3.0], &x), dot(&[1.0, 2.0, 1.0], &x)];
    let limits = vec![constant(100.0), constant(80.0)];
    let resources = VectorConstraint::new(usage, ConstraintSense::LessEq, limits)
        .expect("Mismatched resource rows");

    let mut constraints: Vec<Constraint> = resources
        .into_scalars()
        .into_iter()
        .map(Constraint::from)
        .collect();
    constraints.extend(x.iter().map(|v| v.geq(0.0)));

    for c in &constraints {
        if let Constraint::Scalar(c) = c {
            println!("  {c}");
        }
    }

    println!("\nSolving...");
    let solution = Problem::maximize(dot(&[3.0, 2.0, 5.0], &x))
        .named("production_plan")
        .over(x.clone())
        .subject_to(constraints)
        .solve()
        .expect("Failed to solve");

    println!("\nResults:");
    println!("  Optimal profit: {:.4}", solution.objective_value);
    for (var, value) in solution.iter() {
        println!("  {var} = {value}");
    }
}
