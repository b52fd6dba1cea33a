//! Matrix assembly and solving.
//!
//! This module provides:
//! - `SimplexBuilder` to accumulate `G, h`, `A, b` and `c` from constraints
//!   and an objective
//! - The `LpBackend` seam and its Clarabel implementation
//! - Solve orchestration, including the sign-split fold of the LP result

pub mod backend;
pub mod builder;
pub mod clarabel;
pub mod settings;
pub mod solution;
pub mod solve;
pub mod system;

pub use backend::{LpBackend, RawSolution};
pub use builder::{GeneralForm, SimplexBuilder};
pub use self::clarabel::ClarabelBackend;
pub use settings::Settings;
pub use solution::Solution;
pub use solve::{build, fold_sign_split, solve, solve_with_backend};
pub use system::ConstraintSystem;
