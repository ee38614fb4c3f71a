//! Word analysis command
//!
//! Shows how a word splits the dictionary into feedback partitions.

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::minimax::partition;
use crate::wordlists::Dictionary;

/// Number of largest partitions kept in an analysis
const TOP_PARTITIONS: usize = 5;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    /// Size of the largest partition
    pub worst_case: usize,
    /// Number of distinct feedback patterns
    pub pattern_count: usize,
    /// Largest partitions, biggest first
    pub largest: Vec<(Pattern, usize)>,
    pub in_dictionary: bool,
}

/// Analyze the partitions a word induces over the dictionary
///
/// # Errors
///
/// Returns `SolverError::InvalidInput` if the word is not 5 letters.
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, SolverError> {
    let word = Word::new(word)?;
    let candidates: Vec<&Word> = dictionary.words().iter().collect();

    let groups = partition(&word, &candidates);
    let mut largest: Vec<(Pattern, usize)> = groups.into_iter().collect();
    largest.sort_by_key(|&(pattern, size)| (std::cmp::Reverse(size), pattern.value()));
    let pattern_count = largest.len();
    let worst_case = largest.first().map_or(0, |&(_, size)| size);
    largest.truncate(TOP_PARTITIONS);

    Ok(AnalysisResult {
        word,
        total_candidates: candidates.len(),
        worst_case,
        pattern_count,
        largest,
        in_dictionary: dictionary.contains(&word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::minimax::worst_case;

    #[test]
    fn analyze_counts_partitions() {
        let dictionary = Dictionary::from_strs(&["baaaa", "caaaa", "daaaa", "bcddd"]);

        let result = analyze_word("baaaa", &dictionary).unwrap();

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.worst_case, 2);
        assert_eq!(result.pattern_count, 3);
        assert_eq!(result.largest[0], (Pattern::parse("xgggg").unwrap(), 2));
        assert!(result.in_dictionary);
    }

    #[test]
    fn analyze_matches_worst_case() {
        let dictionary = Dictionary::from_strs(&["slate", "crane", "craze", "treat", "apple"]);
        let candidates: Vec<&Word> = dictionary.words().iter().collect();

        let result = analyze_word("trace", &dictionary).unwrap();

        assert_eq!(
            result.worst_case,
            worst_case(&Word::new("trace").unwrap(), &candidates)
        );
        assert!(!result.in_dictionary);
        assert!(result.largest.len() <= TOP_PARTITIONS);
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = Dictionary::from_strs(&["slate"]);
        assert!(analyze_word("toolong", &dictionary).is_err());
    }
}
