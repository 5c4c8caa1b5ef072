//! Pure tally helpers
//!
//! Stateless functions with no connection to any election instance: a
//! recursive vote aggregator over nested region trees and a functional
//! increment over immutable tally maps. Neither mutates its input.

use crate::types::{Region, Tally};

/// Sum the votes of a region tree, recursively
///
/// Returns the node's own votes plus the recursive total of every
/// sub-region. `None` (the absent/invalid-input case) counts as 0.
/// Terminates because region trees are finite and acyclic.
///
/// # Examples
///
/// ```rust
/// use panchayat::tally::count_votes_in_regions;
/// use panchayat::types::Region;
///
/// let district = Region::branch(
///     "District",
///     5,
///     vec![Region::leaf("Village A", 3), Region::leaf("Village B", 2)],
/// );
///
/// assert_eq!(count_votes_in_regions(Some(&district)), 10);
/// assert_eq!(count_votes_in_regions(None), 0);
/// ```
pub fn count_votes_in_regions(tree: Option<&Region>) -> u64 {
    let Some(region) = tree else {
        return 0;
    };

    region.votes
        + region
            .sub_regions
            .iter()
            .map(|sub| count_votes_in_regions(Some(sub)))
            .sum::<u64>()
}

/// Return a new tally with the candidate's count incremented by one
///
/// A candidate absent from the tally is initialized at 1. The input map is
/// borrowed read-only and never mutated; every call allocates a fresh
/// result, so the function is referentially transparent.
///
/// # Examples
///
/// ```rust
/// use panchayat::tally::tally_vote;
/// use panchayat::types::Tally;
///
/// let empty = Tally::new();
/// let once = tally_vote(&empty, "cand1");
/// let twice = tally_vote(&once, "cand1");
///
/// assert_eq!(once.get("cand1"), Some(&1));
/// assert_eq!(twice.get("cand1"), Some(&2));
/// assert!(empty.is_empty());
/// ```
pub fn tally_vote(tally: &Tally, candidate_id: &str) -> Tally {
    let mut next = tally.clone();
    *next.entry(candidate_id.to_string()).or_insert(0) += 1;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_votes_none_is_zero() {
        assert_eq!(count_votes_in_regions(None), 0);
    }

    #[test]
    fn test_count_votes_single_region() {
        let region = Region::leaf("Ward 1", 7);
        assert_eq!(count_votes_in_regions(Some(&region)), 7);
    }

    #[test]
    fn test_count_votes_nested_regions() {
        let tree = Region::branch(
            "R",
            5,
            vec![Region::leaf("R1", 3), Region::leaf("R2", 2)],
        );
        assert_eq!(count_votes_in_regions(Some(&tree)), 10);
    }

    #[test]
    fn test_count_votes_deeply_nested() {
        let tree = Region::branch(
            "State",
            1,
            vec![Region::branch(
                "District",
                2,
                vec![Region::branch(
                    "Block",
                    3,
                    vec![Region::leaf("Village", 4)],
                )],
            )],
        );
        assert_eq!(count_votes_in_regions(Some(&tree)), 10);
    }

    #[test]
    fn test_count_votes_does_not_mutate_input() {
        let tree = Region::branch("R", 5, vec![Region::leaf("R1", 3)]);
        let before = tree.clone();

        count_votes_in_regions(Some(&tree));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_tally_vote_initializes_absent_candidate() {
        let tally = tally_vote(&Tally::new(), "cand1");
        assert_eq!(tally.get("cand1"), Some(&1));
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn test_tally_vote_increments_existing_candidate() {
        let mut tally = Tally::new();
        tally.insert("cand1".to_string(), 1);

        let next = tally_vote(&tally, "cand1");
        assert_eq!(next.get("cand1"), Some(&2));
    }

    #[test]
    fn test_tally_vote_never_mutates_argument() {
        let mut original = Tally::new();
        original.insert("cand1".to_string(), 1);
        original.insert("cand2".to_string(), 3);

        let next = tally_vote(&original, "cand1");

        assert_eq!(original.get("cand1"), Some(&1));
        assert_eq!(original.get("cand2"), Some(&3));
        assert_eq!(next.get("cand1"), Some(&2));
        assert_eq!(next.get("cand2"), Some(&3));
    }

    #[test]
    fn test_tally_vote_is_referentially_transparent() {
        let mut tally = Tally::new();
        tally.insert("cand1".to_string(), 5);
        tally.insert("cand2".to_string(), 3);

        assert_eq!(tally_vote(&tally, "cand2"), tally_vote(&tally, "cand2"));
    }
}
