//! Error taxonomy for the solver
//!
//! None of these are fatal: callers re-prompt on `InvalidInput`, report an
//! unsolvable puzzle on `ContradictoryFeedback`, and count `ExhaustedAttempts`
//! as a failed game.

use crate::core::{Pattern, Word, WordError};
use thiserror::Error;

/// Errors surfaced by the solving core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed word or feedback string
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Feedback that no remaining dictionary word could have produced
    #[error("feedback {pattern} for '{guess}' rules out every remaining word")]
    ContradictoryFeedback { guess: Word, pattern: Pattern },

    /// The session used all of its guesses without finding the word
    #[error("not solved within {cap} guesses")]
    ExhaustedAttempts { cap: usize },
}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_error_becomes_invalid_input() {
        let err: SolverError = Word::new("shrt").unwrap_err().into();
        assert!(matches!(err, SolverError::InvalidInput(_)));
        assert!(err.to_string().contains("exactly 5 letters"));
    }

    #[test]
    fn contradiction_message_names_guess_and_pattern() {
        let err = SolverError::ContradictoryFeedback {
            guess: Word::new("slate").unwrap(),
            pattern: Pattern::PERFECT,
        };
        assert_eq!(
            err.to_string(),
            "feedback ggggg for 'slate' rules out every remaining word"
        );
    }
}
