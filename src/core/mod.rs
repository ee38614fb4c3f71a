//! Core domain types for the puzzle
//!
//! Words, feedback patterns and the feedback evaluator. Everything here is
//! pure and allocation-free on the hot path.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern, evaluate, evaluate_str};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError};
