//! Decide whether a traced path finds one of the hidden words.
//!
//! Matching is pure: it only reads the paths it is given.

use crate::WordPathPosition;
use serde::{Deserialize, Serialize};

/// How strictly a candidate must follow a solution path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Same cells in the same order as the generated placement
    ExactPosition,
    /// Any path spelling the same word, ignoring case
    #[default]
    CharacterSequence,
}

/// Does `candidate` match `solution` under `policy`?
///
/// A candidate position without a letter never matches under
/// [`MatchPolicy::CharacterSequence`].
pub fn matches(
    policy: MatchPolicy,
    solution: &[WordPathPosition],
    candidate: &[WordPathPosition],
) -> bool {
    if solution.len() != candidate.len() {
        return false;
    }
    match policy {
        MatchPolicy::ExactPosition => solution
            .iter()
            .zip(candidate)
            .all(|(s, c)| s.same_cell(c)),
        MatchPolicy::CharacterSequence => solution.iter().zip(candidate).all(|(s, c)| {
            match (s.ch, c.ch) {
                (Some(a), Some(b)) => a.to_uppercase().eq(b.to_uppercase()),
                _ => false,
            }
        }),
    }
}

/// Index of the first solution path the candidate matches.
pub fn find_match<P: AsRef<[WordPathPosition]>>(
    policy: MatchPolicy,
    solutions: &[P],
    candidate: &[WordPathPosition],
) -> Option<usize> {
    solutions
        .iter()
        .position(|solution| matches(policy, solution.as_ref(), candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordPath;

    fn path(cells: &[(usize, usize, char)]) -> WordPath {
        cells
            .iter()
            .map(|&(x, y, c)| WordPathPosition::new(x, y, c))
            .collect()
    }

    fn cat() -> WordPath {
        path(&[(0, 0, 'c'), (1, 1, 'a'), (2, 1, 't')])
    }

    #[test]
    fn test_path_matches_itself() {
        for policy in [MatchPolicy::ExactPosition, MatchPolicy::CharacterSequence] {
            assert!(matches(policy, &cat(), &cat()));
        }
    }

    #[test]
    fn test_case_insensitive() {
        let shouted = path(&[(0, 0, 'C'), (1, 1, 'A'), (2, 1, 'T')]);
        assert!(matches(MatchPolicy::CharacterSequence, &cat(), &shouted));
        assert!(matches(MatchPolicy::CharacterSequence, &shouted, &cat()));
    }

    #[test]
    fn test_same_word_elsewhere() {
        let elsewhere = path(&[(5, 5, 'C'), (5, 6, 'A'), (4, 7, 'T')]);
        assert!(matches(MatchPolicy::CharacterSequence, &cat(), &elsewhere));
        assert!(!matches(MatchPolicy::ExactPosition, &cat(), &elsewhere));
    }

    #[test]
    fn test_reversed_word_does_not_match() {
        let reversed = path(&[(2, 1, 'T'), (1, 1, 'A'), (0, 0, 'C')]);
        assert!(!matches(MatchPolicy::CharacterSequence, &cat(), &reversed));
    }

    #[test]
    fn test_prefix_and_extension_do_not_match() {
        let prefix = path(&[(0, 0, 'C'), (1, 1, 'A')]);
        let longer = path(&[(0, 0, 'C'), (1, 1, 'A'), (2, 1, 'T'), (3, 1, 'S')]);
        for policy in [MatchPolicy::ExactPosition, MatchPolicy::CharacterSequence] {
            assert!(!matches(policy, &cat(), &prefix));
            assert!(!matches(policy, &cat(), &longer));
        }
    }

    #[test]
    fn test_missing_character_is_no_match() {
        let mut candidate = cat();
        candidate[1].ch = None;
        assert!(!matches(MatchPolicy::CharacterSequence, &cat(), &candidate));
    }

    #[test]
    fn test_find_match_takes_first_in_order() {
        let dog = path(&[(0, 2, 'd'), (1, 2, 'o'), (2, 2, 'g')]);
        let cat_again = path(&[(3, 3, 'c'), (3, 4, 'a'), (3, 5, 't')]);
        let solutions = vec![dog, cat(), cat_again];

        let candidate = path(&[(7, 7, 'C'), (7, 8, 'A'), (8, 8, 'T')]);
        assert_eq!(
            find_match(MatchPolicy::CharacterSequence, &solutions, &candidate),
            Some(1)
        );
        assert_eq!(
            find_match(MatchPolicy::ExactPosition, &solutions, &candidate),
            None
        );
    }

    #[test]
    fn test_find_match_empty_candidate() {
        let solutions = vec![cat()];
        assert_eq!(
            find_match(MatchPolicy::CharacterSequence, &solutions, &[]),
            None
        );
    }
}
