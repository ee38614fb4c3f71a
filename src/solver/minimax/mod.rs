//! Minimax guess scoring
//!
//! Implements the worst-case minimization used for every guess after the
//! opening.

mod calculator;
mod selector;

pub use calculator::{partition, worst_case};
pub use selector::select_best_guess;
