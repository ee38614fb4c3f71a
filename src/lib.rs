//! Hard-Mode Wordle Solver
//!
//! Picks every guess from the words still consistent with the feedback, and
//! among those the one that minimizes the worst-case remaining solution space.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hardmode::core::{Word, evaluate};
//! use wordle_hardmode::session::{GameSession, SecretFeedback, SessionConfig};
//! use wordle_hardmode::solver::GuessSelector;
//! use wordle_hardmode::wordlists::Dictionary;
//!
//! let secret = Word::new("craze").unwrap();
//! let guess = Word::new("slate").unwrap();
//! assert_eq!(evaluate(&secret, &guess).to_string(), "xxgxg");
//!
//! let dictionary = Dictionary::from_strs(&["slate", "crane", "craze", "grave"]);
//! let selector = GuessSelector::default();
//! let mut session = GameSession::new(&dictionary, &selector, SessionConfig::default()).unwrap();
//!
//! let outcome = session.play(&mut SecretFeedback::new(secret)).unwrap();
//! assert!(outcome.solved);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Filtering and minimax selection
pub mod solver;

// One game from first guess to solve
pub mod session;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
