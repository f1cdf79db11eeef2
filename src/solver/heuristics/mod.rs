//! Ordering heuristics for the backtracking search.
//!
//! Heuristics only guide the order in which variables and values are tried;
//! they never prune domains and never affect which solutions exist.

pub mod value;
pub mod variable;
