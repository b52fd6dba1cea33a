//! Linearization of expressions and constraints.
//!
//! This module converts symbolic constraints into matrix rows:
//! - `extract` reads linear coefficient vectors relative to a variable ordering
//! - `normalize` rewrites a constraint into a canonical `G x <= h` or `A x == b` row

pub mod extract;
pub mod normalize;

pub use extract::{linear_form, LinearForm, VariableIndex};
pub use normalize::{normalize, normalize_with, LinearRow, NormalizedRow, RowKind};
