//! One full game of the puzzle
//!
//! A session starts from the whole dictionary, asks the selector for a guess,
//! takes the feedback for it and narrows its solution space, until the secret
//! is confirmed or the guess cap runs out.
//!
//! ```text
//! Start ─▶ AwaitingFeedback ─▶ Narrowed ─▶ AwaitingFeedback ─▶ …
//!                 │                                   │
//!                 ├──▶ Solved (all-Correct feedback)  │
//!                 └──▶ Failed (cap used) ◀────────────┘
//! ```
//!
//! When the feedback comes from a known secret, the session is also solved
//! the moment its space holds that secret alone.

mod feedback;

pub use feedback::{FeedbackSource, SecretFeedback};

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::{Choice, GuessSelector, SolutionSpace};
use crate::wordlists::Dictionary;
use log::{debug, warn};

/// Default number of guesses before a game counts as failed
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Guesses allowed before the session fails
    pub max_guesses: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES)
    }
}

/// A guess with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    AwaitingFeedback(Word),
    Narrowed,
    Solved,
    Failed,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

/// Final report of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub solved: bool,
    pub records: Vec<GuessRecord>,
    /// Words still consistent with the feedback when the session ended
    pub remaining: Vec<Word>,
}

impl SessionOutcome {
    /// Guesses played
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.records.len()
    }

    /// The identified secret, if the session was solved
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        match self.remaining.as_slice() {
            [only] if self.solved => Some(only),
            _ => None,
        }
    }
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession<'d, 's> {
    selector: &'s GuessSelector,
    config: SessionConfig,
    space: SolutionSpace<'d>,
    history: Vec<GuessRecord>,
    phase: Phase,
}

impl<'d, 's> GameSession<'d, 's> {
    /// Start a session over the whole dictionary
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` for an empty dictionary or a zero
    /// guess cap.
    pub fn new(
        dictionary: &'d Dictionary,
        selector: &'s GuessSelector,
        config: SessionConfig,
    ) -> Result<Self, SolverError> {
        if dictionary.is_empty() {
            return Err(SolverError::InvalidInput("dictionary is empty".into()));
        }
        if config.max_guesses == 0 {
            return Err(SolverError::InvalidInput(
                "guess cap must be at least 1".into(),
            ));
        }

        Ok(Self {
            selector,
            config,
            space: SolutionSpace::full(dictionary),
            history: Vec::new(),
            phase: Phase::Start,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub const fn space(&self) -> &SolutionSpace<'d> {
        &self.space
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// The selector's suggestion for the current space, without changing phase
    #[must_use]
    pub fn suggest(&self) -> Option<Choice<'d>> {
        self.selector.select(&self.space, self.history.is_empty())
    }

    /// Ask the selector for the next guess and wait for its feedback
    ///
    /// A solved session keeps returning its secret.
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedAttempts` once the session has failed.
    pub fn next_guess(&mut self) -> Result<Word, SolverError> {
        match self.phase {
            Phase::Failed => return Err(self.exhausted()),
            Phase::Solved => {
                if let Some(secret) = self.space.solution() {
                    return Ok(*secret);
                }
            }
            _ => {}
        }

        let choice = self.suggest().ok_or_else(|| {
            SolverError::InvalidInput("no candidates left to guess from".into())
        })?;
        let word = *choice.word;

        debug!(
            "guess {} of {}: '{word}' ({} candidates)",
            self.history.len() + 1,
            self.config.max_guesses,
            self.space.len()
        );
        self.phase = Phase::AwaitingFeedback(word);
        Ok(word)
    }

    /// Record the feedback `pattern` for `guess` and narrow the space
    ///
    /// The guess need not be the suggested one, which lets a human play a
    /// word of their own.
    ///
    /// # Errors
    /// - `ContradictoryFeedback` if no remaining word is consistent with the
    ///   feedback; the session is left unchanged so it can be re-entered.
    /// - `ExhaustedAttempts` if the session already failed.
    /// - `InvalidInput` if the session is already solved.
    pub fn submit(&mut self, guess: Word, pattern: Pattern) -> Result<Phase, SolverError> {
        match self.phase {
            Phase::Failed => return Err(self.exhausted()),
            Phase::Solved => {
                return Err(SolverError::InvalidInput(
                    "the puzzle is already solved".into(),
                ));
            }
            _ => {}
        }

        let narrowed = self.space.filter(&guess, pattern);
        if narrowed.is_empty() {
            warn!(
                "feedback {pattern} for '{guess}' contradicts all {} candidates",
                self.space.len()
            );
            return Err(SolverError::ContradictoryFeedback { guess, pattern });
        }
        if !self.space.contains(&guess) {
            warn!("'{guess}' is not a remaining candidate");
        }

        self.history.push(GuessRecord {
            guess,
            pattern,
            candidates_before: self.space.len(),
            candidates_after: narrowed.len(),
        });
        self.space = narrowed;

        self.phase = if pattern.is_perfect() {
            Phase::Solved
        } else if self.history.len() >= self.config.max_guesses {
            Phase::Failed
        } else {
            Phase::Narrowed
        };

        Ok(self.phase)
    }

    /// Record feedback for the guess returned by [`next_guess`](Self::next_guess)
    ///
    /// # Errors
    /// `InvalidInput` when no guess is pending, plus everything
    /// [`submit`](Self::submit) returns.
    pub fn submit_feedback(&mut self, pattern: Pattern) -> Result<Phase, SolverError> {
        match self.phase {
            Phase::AwaitingFeedback(guess) => self.submit(guess, pattern),
            _ => Err(SolverError::InvalidInput(
                "no guess is waiting for feedback".into(),
            )),
        }
    }

    /// Play until solved or out of guesses
    ///
    /// With a source that knows the secret, the game is solved once the space
    /// has narrowed to that word, even on the last allowed guess. Otherwise an
    /// all-Correct pattern is needed. Running out of guesses is reported
    /// through `SessionOutcome::solved`, not as an error.
    ///
    /// # Errors
    /// Propagates errors from the feedback source and
    /// `ContradictoryFeedback` from filtering.
    pub fn play<F: FeedbackSource + ?Sized>(
        &mut self,
        source: &mut F,
    ) -> Result<SessionOutcome, SolverError> {
        while !self.phase.is_terminal() {
            let guess = self.next_guess()?;
            let pattern = source.feedback(&guess)?;
            self.submit(guess, pattern)?;
            if let Some(secret) = source.known_secret() {
                self.confirm(&secret);
            }
        }
        Ok(self.outcome())
    }

    /// Mark the session solved if the space has narrowed to `secret` alone
    fn confirm(&mut self, secret: &Word) {
        if self.phase != Phase::Solved && self.space.solution() == Some(secret) {
            debug!(
                "'{secret}' identified after {} guesses",
                self.history.len()
            );
            self.phase = Phase::Solved;
        }
    }

    /// Drop the last guess and rebuild the space from the remaining history
    pub fn undo(&mut self) -> Option<GuessRecord> {
        let record = self.history.pop()?;

        let mut space = SolutionSpace::full(self.space.dictionary());
        for earlier in &self.history {
            space = space.filter(&earlier.guess, earlier.pattern);
        }
        self.space = space;
        self.phase = if self.history.is_empty() {
            Phase::Start
        } else {
            Phase::Narrowed
        };

        Some(record)
    }

    /// Start over with the whole dictionary
    pub fn reset(&mut self) {
        self.space = SolutionSpace::full(self.space.dictionary());
        self.history.clear();
        self.phase = Phase::Start;
    }

    /// Snapshot of the session as it stands
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            solved: self.phase == Phase::Solved,
            records: self.history.clone(),
            remaining: self.space.to_words(),
        }
    }

    const fn exhausted(&self) -> SolverError {
        SolverError::ExhaustedAttempts {
            cap: self.config.max_guesses,
        }
    }
}
