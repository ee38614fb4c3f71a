//! Feedback pattern evaluation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not available in the secret)
//! - 1 = Present (letter in the secret, wrong position)
//! - 2 = Correct (letter in the right position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word};
use crate::error::SolverError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one feedback symbol: `g` Correct, `y` Present, `x` Absent
    ///
    /// The coloured squares are accepted too, so patterns can be pasted from
    /// a shared result.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'x' | 'X' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The canonical `g`/`y`/`x` symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All Correct (the guess is the secret)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all Correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in feedback {
            pattern += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode the per-position feedback
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for mark in &mut result {
            *mark = Feedback::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Count the number of Correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&mark| mark == Feedback::Correct)
            .count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&mark| mark == Feedback::Present)
            .count()
    }

    /// Parse a pattern from a string like "gyxxg" or "🟩🟨⬜⬜🟩"
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the string is not exactly five
    /// symbols long or contains a symbol other than `g`, `y`, `x` (or the
    /// matching squares).
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Pattern;
    ///
    /// let p1 = Pattern::parse("gyxxg").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("gyx").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let symbols: Vec<char> = s.trim().chars().collect();

        let symbols: [char; WORD_LEN] = symbols.try_into().map_err(|v: Vec<char>| {
            SolverError::InvalidInput(format!(
                "feedback must be {WORD_LEN} symbols long, got {}",
                v.len()
            ))
        })?;

        let mut feedback = [Feedback::Absent; WORD_LEN];
        for (mark, symbol) in feedback.iter_mut().zip(symbols) {
            *mark = Feedback::from_symbol(symbol).ok_or_else(|| {
                SolverError::InvalidInput(format!(
                    "unknown feedback symbol '{symbol}' (use g, y or x)"
                ))
            })?;
        }

        Ok(Self::from_feedback(feedback))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_hardmode::core::Pattern;
    ///
    /// let p = Pattern::parse("gyxgy").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|mark| match mark {
                Feedback::Correct => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.feedback() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compute the feedback `guess` receives when `secret` is the hidden word
///
/// Implements the puzzle's duplicate-letter rules in two passes:
/// 1. Exact position matches are marked Correct and consume one of that
///    letter's occurrences in the secret.
/// 2. Remaining positions are marked Present while unconsumed occurrences of
///    the letter are left, Absent otherwise.
///
/// A letter that occurs k times in the secret is therefore marked at most k
/// times across the guess.
///
/// # Examples
/// ```
/// use wordle_hardmode::core::{Word, evaluate};
///
/// let secret = Word::new("treat").unwrap();
/// let guess = Word::new("teeth").unwrap();
/// assert_eq!(evaluate(&secret, &guess).to_string(), "gxgyx");
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Pattern {
    let mut result = [Feedback::Absent; WORD_LEN];
    let mut available = secret.letter_counts();
    let guess_chars = guess.chars();
    let secret_chars = secret.chars();

    // Allow: Index needed to access guess[i], secret[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess_chars[i] == secret_chars[i] {
            result[i] = Feedback::Correct;
            available[usize::from(guess_chars[i] - b'a')] -= 1;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if result[i] == Feedback::Correct {
            continue;
        }
        let slot = &mut available[usize::from(guess_chars[i] - b'a')];
        if *slot > 0 {
            result[i] = Feedback::Present;
            *slot -= 1;
        }
    }

    Pattern::from_feedback(result)
}

/// String-facing form of [`evaluate`]
///
/// # Errors
/// Returns `SolverError::InvalidInput` if the two strings differ in length or
/// either one is not a valid word.
pub fn evaluate_str(secret: &str, guess: &str) -> Result<Pattern, SolverError> {
    let (secret_len, guess_len) = (secret.chars().count(), guess.chars().count());
    if secret_len != guess_len {
        return Err(SolverError::InvalidInput(format!(
            "secret and guess differ in length ({secret_len} vs {guess_len})"
        )));
    }
    Ok(evaluate(&Word::new(secret)?, &Word::new(guess)?))
}
