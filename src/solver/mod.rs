//! Hard-mode solving
//!
//! Solution-space filtering and minimax guess selection.

mod engine;
pub mod minimax;
mod space;

pub use engine::{Choice, DEFAULT_OPENING, GuessSelector};
pub use space::SolutionSpace;
