//! Hard-mode guess selector

use super::minimax::select_best_guess;
use super::space::SolutionSpace;
use crate::core::Word;
use log::debug;

/// Opening word used when none is configured
pub const DEFAULT_OPENING: &str = "slate";

/// A suggested guess and its worst-case remaining space size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'d> {
    pub word: &'d Word,
    /// Largest space that can remain after this guess; `None` for the
    /// precomputed opening, which is never scored at runtime
    pub worst_case: Option<usize>,
}

/// Chooses the next guess for a solution space
///
/// Every guess is drawn from the space itself (hard mode). The opening guess
/// is fixed at construction so the most expensive scan, over the whole
/// dictionary, is skipped.
#[derive(Debug, Clone)]
pub struct GuessSelector {
    opening: Option<Word>,
}

impl GuessSelector {
    /// Create a selector with an optional precomputed opening
    ///
    /// With `None`, the first guess is computed by a full minimax scan.
    #[must_use]
    pub const fn new(opening: Option<Word>) -> Self {
        Self { opening }
    }

    /// The configured opening word
    #[must_use]
    pub const fn opening(&self) -> Option<&Word> {
        self.opening.as_ref()
    }

    /// Pick the next guess for `space`
    ///
    /// On the first guess the configured opening is returned as long as it
    /// is a member of the space; otherwise the member with the smallest
    /// worst case wins, ties going to the lowest dictionary index.
    ///
    /// A one-word space returns that word. An empty space returns `None`.
    ///
    /// Cost is O(|space|²) pattern evaluations outside the opening.
    #[must_use]
    pub fn select<'d>(
        &self,
        space: &SolutionSpace<'d>,
        is_first_guess: bool,
    ) -> Option<Choice<'d>> {
        if let Some(word) = space.solution() {
            return Some(Choice {
                word,
                worst_case: Some(1),
            });
        }

        if is_first_guess && let Some(opening) = &self.opening {
            if let Some(word) = space.iter().find(|&w| w == opening) {
                return Some(Choice {
                    word,
                    worst_case: None,
                });
            }
            debug!("opening '{opening}' is not a candidate, scanning instead");
        }

        // Snapshot order is dictionary order, so pool position is the tie-break.
        let snapshot = space.snapshot();
        let (word, worst) = select_best_guess(&snapshot, &snapshot)?;
        debug!(
            "selected '{word}' from {} candidates (worst case {worst})",
            snapshot.len()
        );

        Some(Choice {
            word,
            worst_case: Some(worst),
        })
    }
}

impl Default for GuessSelector {
    fn default() -> Self {
        Self::new(Word::new(DEFAULT_OPENING).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::wordlists::Dictionary;

    fn fixture() -> Dictionary {
        Dictionary::from_strs(&[
            "apple", "baker", "crane", "drate", "slate", "treat", "zzzzz",
        ])
    }

    #[test]
    fn first_guess_uses_opening() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);

        let choice = GuessSelector::default().select(&space, true).unwrap();

        assert_eq!(choice.word.text(), "slate");
        assert_eq!(choice.worst_case, None);
    }

    #[test]
    fn injected_opening_is_honoured() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);
        let selector = GuessSelector::new(Word::new("zzzzz").ok());

        let choice = selector.select(&space, true).unwrap();
        assert_eq!(choice.word.text(), "zzzzz");
    }

    #[test]
    fn opening_not_used_after_first_guess() {
        let dictionary = Dictionary::from_strs(&["slate", "baaaa", "caaaa", "daaaa", "bcddd"]);
        let space = SolutionSpace::full(&dictionary);

        let choice = GuessSelector::default().select(&space, false).unwrap();
        assert_ne!(choice.word.text(), "slate");
        assert!(space.contains(choice.word));
    }

    #[test]
    fn missing_opening_falls_back_to_scan() {
        let dictionary = Dictionary::from_strs(&["baaaa", "caaaa", "daaaa", "bcddd"]);
        let space = SolutionSpace::full(&dictionary);

        let choice = GuessSelector::default().select(&space, true).unwrap();
        assert_eq!(choice.word.text(), "bcddd");
        assert_eq!(choice.worst_case, Some(1));
    }

    #[test]
    fn no_opening_scans_on_first_guess() {
        let dictionary = Dictionary::from_strs(&["aaaaa", "bbbbb"]);
        let space = SolutionSpace::full(&dictionary);

        let choice = GuessSelector::new(None).select(&space, true).unwrap();
        assert_eq!(choice.word.text(), "aaaaa");
    }

    #[test]
    fn tie_break_follows_dictionary_order() {
        // Symmetric words: every member ties at worst case 2
        let forward = Dictionary::from_strs(&["aaaaa", "bbbbb", "ccccc"]);
        let reversed = Dictionary::from_strs(&["ccccc", "bbbbb", "aaaaa"]);
        let selector = GuessSelector::new(None);

        let a = selector.select(&SolutionSpace::full(&forward), false).unwrap();
        let c = selector.select(&SolutionSpace::full(&reversed), false).unwrap();

        assert_eq!(a.word.text(), "aaaaa");
        assert_eq!(c.word.text(), "ccccc");
    }

    #[test]
    fn single_word_space_returns_it() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary)
            .filter(&Word::new("slate").unwrap(), Pattern::parse("xxyyy").unwrap());

        let choice = GuessSelector::default().select(&space, false).unwrap();
        assert_eq!(choice.word.text(), "treat");
    }

    #[test]
    fn empty_space_returns_none() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary)
            .filter(&Word::new("quick").unwrap(), Pattern::PERFECT);

        assert!(GuessSelector::default().select(&space, false).is_none());
    }

    #[test]
    fn selection_is_always_a_member() {
        let dictionary = fixture();
        let selector = GuessSelector::default();
        let guess = Word::new("crane").unwrap();

        for secret in dictionary.words() {
            let space = SolutionSpace::full(&dictionary)
                .filter(&guess, crate::core::evaluate(secret, &guess));
            let choice = selector.select(&space, false).unwrap();
            assert!(space.contains(choice.word), "{} not in space", choice.word);
        }
    }
}
