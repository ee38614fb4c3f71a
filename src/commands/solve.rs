//! Word solving command
//!
//! Plays a full session against a known secret and returns the solution path.

use crate::core::Word;
use crate::error::SolverError;
use crate::session::{GameSession, SecretFeedback, SessionConfig, SessionOutcome};
use crate::solver::GuessSelector;
use crate::wordlists::Dictionary;

/// Solve a specific word using the given selector
///
/// # Errors
///
/// Returns `SolverError::InvalidInput` if the target is not a valid word or
/// is not in the dictionary. Running out of guesses is reported through
/// `SessionOutcome::solved`.
pub fn solve_word(
    dictionary: &Dictionary,
    selector: &GuessSelector,
    target: &str,
    config: SessionConfig,
) -> Result<SessionOutcome, SolverError> {
    let target = Word::new(target)?;
    if !dictionary.contains(&target) {
        return Err(SolverError::InvalidInput(format!(
            "'{target}' is not in the dictionary"
        )));
    }

    GameSession::new(dictionary, selector, config)?.play(&mut SecretFeedback::new(target))
}
