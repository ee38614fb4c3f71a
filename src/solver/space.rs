//! Solution space: dictionary words still consistent with the feedback
//!
//! A space is a list of dictionary indices kept in ascending order, so
//! iteration always follows dictionary order no matter how many rounds of
//! filtering it went through.

use crate::core::{Pattern, Word, evaluate};
use crate::wordlists::Dictionary;

/// The set of words that could still be the secret
#[derive(Debug, Clone)]
pub struct SolutionSpace<'d> {
    dictionary: &'d Dictionary,
    members: Vec<usize>,
}

impl<'d> SolutionSpace<'d> {
    /// Every dictionary word, the space before any feedback
    #[must_use]
    pub fn full(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            members: (0..dictionary.len()).collect(),
        }
    }

    /// The dictionary this space indexes into
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Dictionary indices of the members, ascending
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.members
    }

    /// Members in dictionary order
    pub fn iter(&self) -> impl Iterator<Item = &'d Word> + '_ {
        let dictionary = self.dictionary;
        self.members.iter().map(move |&i| dictionary.word(i))
    }

    /// Flat array of member references for one selection round
    #[must_use]
    pub fn snapshot(&self) -> Vec<&'d Word> {
        self.iter().collect()
    }

    /// Owned copies of the members, for reporting
    #[must_use]
    pub fn to_words(&self) -> Vec<Word> {
        self.iter().copied().collect()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary
            .position(word)
            .is_some_and(|i| self.members.binary_search(&i).is_ok())
    }

    /// The only remaining word, once the space has collapsed
    #[must_use]
    pub fn solution(&self) -> Option<&'d Word> {
        match self.members.as_slice() {
            [only] => Some(self.dictionary.word(*only)),
            _ => None,
        }
    }

    /// Keep the members that would have produced `pattern` for `guess`
    ///
    /// Returns a new space and leaves `self` untouched. The result is empty
    /// when the feedback is inconsistent with every member.
    #[must_use]
    pub fn filter(&self, guess: &Word, pattern: Pattern) -> Self {
        let members = self
            .members
            .iter()
            .copied()
            .filter(|&i| evaluate(self.dictionary.word(i), guess) == pattern)
            .collect();

        Self {
            dictionary: self.dictionary,
            members,
        }
    }
}

impl PartialEq for SolutionSpace<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dictionary, other.dictionary) && self.members == other.members
    }
}

impl Eq for SolutionSpace<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Dictionary {
        Dictionary::from_strs(&[
            "apple", "baker", "crane", "drate", "slate", "treat", "zzzzz",
        ])
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn full_space_matches_dictionary_order() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);

        assert_eq!(space.len(), 7);
        assert_eq!(space.snapshot()[0].text(), "apple");
        assert_eq!(space.indices(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn filter_leaves_single_consistent_word() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);

        let filtered = space.filter(&word("slate"), Pattern::parse("xxyyy").unwrap());

        assert_eq!(filtered.to_words(), vec![word("treat")]);
        assert_eq!(filtered.solution(), Some(&word("treat")));
        // Input untouched
        assert_eq!(space.len(), 7);
    }

    #[test]
    fn filter_is_idempotent() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);
        let guess = word("crane");
        let pattern = evaluate(&word("drate"), &guess);

        let once = space.filter(&guess, pattern);
        let twice = once.filter(&guess, pattern);

        assert_eq!(once, twice);
        assert!(once.contains(&word("drate")));
    }

    #[test]
    fn filter_keeps_dictionary_order() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);

        // Every word without an 'x' anywhere
        let filtered = space.filter(&word("xxxxx"), Pattern::new(0));

        assert_eq!(filtered.len(), 7);
        assert!(filtered.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn contradictory_feedback_empties_space() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary);

        let filtered = space.filter(&word("quick"), Pattern::PERFECT);

        assert!(filtered.is_empty());
        assert_eq!(filtered.solution(), None);
    }

    #[test]
    fn contains_respects_membership() {
        let dictionary = fixture();
        let space = SolutionSpace::full(&dictionary).filter(&word("treat"), Pattern::PERFECT);

        assert!(space.contains(&word("treat")));
        assert!(!space.contains(&word("slate")));
        assert!(!space.contains(&word("quick")));
    }
}
