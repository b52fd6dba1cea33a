//! Bounded Box Example
//!
//! minimize    -x1 - x2
//! subject to  x1 <= 2, x2 <= 1, x1 >= 0, x2 >= 0
//!
//! The optimum is the corner (2, 1). The assembled matrices are printed
//! before solving.

use lpbridge::prelude::*;
use lpbridge::solver::build;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bounded Box ===\n");

    let x1 = named_variable("x1");
    let x2 = named_variable("x2");

    let problem = Problem::minimize(-&x1 - &x2)
        .named("bounded_box")
        .over([x1.clone(), x2.clone()])
        .subject_to([x1.leq(2.0), x2.leq(1.0), x1.geq(0.0), x2.geq(0.0)])
        .build();

    for c in &problem.constraints {
        if let Constraint::Scalar(c) = c {
            println!("  {c}");
        }
    }

    let builder = build(&problem).expect("Failed to assemble");
    println!("\nc = {:?}", builder.c());
    println!("G ={}", builder.g());
    println!("h = {:?}", builder.h());

    println!("Solving...");
    let solution = problem.solve().expect("Failed to solve");

    println!("\nResults:");
    println!("  Optimal value: {:.4}", solution.objective_value);
    println!("  x1 = {}", solution[&x1]);
    println!("  x2 = {}", solution[&x2]);
}
