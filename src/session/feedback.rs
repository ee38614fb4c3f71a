//! Where a session's feedback comes from

use crate::core::{Pattern, Word, evaluate};
use crate::error::SolverError;

/// Supplies the feedback pattern for each guess of a session
pub trait FeedbackSource {
    /// Feedback for `guess`
    ///
    /// # Errors
    /// Implementations return `SolverError::InvalidInput` when they cannot
    /// produce a well-formed pattern.
    fn feedback(&mut self, guess: &Word) -> Result<Pattern, SolverError>;

    /// The secret, when the source knows it up front
    ///
    /// A session playing against a known secret ends as soon as its space
    /// has narrowed to that word alone.
    fn known_secret(&self) -> Option<Word> {
        None
    }
}

/// Feedback computed against a known secret, as in benchmarking
#[derive(Debug, Clone, Copy)]
pub struct SecretFeedback {
    secret: Word,
}

impl SecretFeedback {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }
}

impl FeedbackSource for SecretFeedback {
    fn feedback(&mut self, guess: &Word) -> Result<Pattern, SolverError> {
        Ok(evaluate(&self.secret, guess))
    }

    fn known_secret(&self) -> Option<Word> {
        Some(self.secret)
    }
}

/// Scripted feedback, handy for replaying a recorded game
impl<F> FeedbackSource for F
where
    F: FnMut(&Word) -> Result<Pattern, SolverError>,
{
    fn feedback(&mut self, guess: &Word) -> Result<Pattern, SolverError> {
        self(guess)
    }
}
