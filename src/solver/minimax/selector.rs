//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::worst_case;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Every guess in the pool is scored against every candidate, so one call
/// costs O(|guess pool| × |candidates|) pattern evaluations. In hard mode the
/// pool is the candidate set itself, which makes this quadratic in the size
/// of the solution space. Guesses are scored in parallel.
///
/// Ties go to the guess that comes first in `guess_pool`.
///
/// Returns the winning word with its worst case, or `None` if the guess pool
/// is empty.
///
/// # Examples
/// ```
/// use wordle_hardmode::core::Word;
/// use wordle_hardmode::solver::minimax::select_best_guess;
///
/// let candidates = vec![
///     Word::new("baaaa").unwrap(),
///     Word::new("caaaa").unwrap(),
///     Word::new("daaaa").unwrap(),
///     Word::new("bcddd").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, max_remaining) = select_best_guess(&candidate_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "bcddd");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(position, &guess)| (position, guess, worst_case(guess, candidates)))
        .min_by_key(|&(position, _, max)| (max, position))
        .map(|(_, guess, max)| (guess, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        // Only bcddd separates all four; the others leave a pair together
        let candidates = words(&["baaaa", "caaaa", "daaaa", "bcddd"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, max_remaining) = select_best_guess(&candidate_refs, &candidate_refs).unwrap();

        assert_eq!(best.text(), "bcddd");
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn ties_go_to_earliest_in_pool() {
        let forward = words(&["aaaaa", "bbbbb"]);
        let forward_refs: Vec<&Word> = forward.iter().collect();
        let (best, max) = select_best_guess(&forward_refs, &forward_refs).unwrap();
        assert_eq!(best.text(), "aaaaa");
        assert_eq!(max, 1);

        let reversed = words(&["bbbbb", "aaaaa"]);
        let reversed_refs: Vec<&Word> = reversed.iter().collect();
        let (best, _) = select_best_guess(&reversed_refs, &reversed_refs).unwrap();
        assert_eq!(best.text(), "bbbbb");
    }

    #[test]
    fn ties_resolved_consistently_across_runs() {
        let candidates = words(&["slate", "crate", "grate", "irate", "trace", "crane"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let first = select_best_guess(&candidate_refs, &candidate_refs);
        for _ in 0..10 {
            assert_eq!(select_best_guess(&candidate_refs, &candidate_refs), first);
        }
    }

    #[test]
    fn single_candidate_returns_it() {
        let candidates = words(&["slate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, max) = select_best_guess(&candidate_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "slate");
        assert_eq!(max, 1);
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = words(&["slate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }
}
