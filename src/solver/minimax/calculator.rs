//! Minimax worst-case calculation for feedback patterns
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible pattern.

use crate::core::{Pattern, Word, evaluate};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Each candidate is treated as a hypothetical secret; candidates that would
/// produce the same pattern end up in the same partition. The worst case is
/// the size of the largest partition. The guess itself, when it is a
/// candidate, forms a partition of one.
///
/// # Examples
/// ```
/// use wordle_hardmode::core::Word;
/// use wordle_hardmode::solver::minimax::worst_case;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert!(worst_case(&guess, &candidate_refs) <= 2);
/// ```
#[must_use]
pub fn worst_case(guess: &Word, candidates: &[&Word]) -> usize {
    let mut counts = [0usize; Pattern::COUNT];
    let mut worst = 0;

    for &candidate in candidates {
        let slot = &mut counts[usize::from(evaluate(candidate, guess).value())];
        *slot += 1;
        worst = worst.max(*slot);
    }

    worst
}

/// Group candidates by the pattern they produce with the guess
///
/// Returns partition sizes keyed by pattern.
#[must_use]
pub fn partition(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = evaluate(candidate, guess);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}
