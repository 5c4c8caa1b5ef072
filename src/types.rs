//! # Core Types for the Election Registry
//!
//! This module defines the data structures shared by the registry and the
//! standalone tally helpers. All types are plain serde-derived values;
//! nothing here carries behavior beyond small constructors.
//!
//! ## Ownership Design
//!
//! - **Registry-owned state**: [`Voter`] records and candidate vote ledgers
//!   live inside an [`Election`](crate::registry::Election) instance and
//!   never leave it by reference
//! - **Boundary copies**: everything a read accessor returns
//!   ([`Candidate`], [`CandidateResult`], [`BallotReceipt`]) is an owned,
//!   independent copy — mutating it cannot touch registry state
//! - **Stateless inputs**: [`Region`] trees and [`Tally`] maps are consumed
//!   read-only by the pure helpers in [`crate::tally`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use panchayat::types::{Candidate, Region};
//!
//! let candidate = Candidate {
//!     id: "C1".to_string(),
//!     name: "Sarpanch Ram".to_string(),
//!     party: "Janata".to_string(),
//! };
//!
//! let region = Region {
//!     name: "North Ward".to_string(),
//!     votes: 5,
//!     sub_regions: vec![],
//! };
//!
//! assert_eq!(candidate.id, "C1");
//! assert_eq!(region.votes, 5);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A candidate standing in an election
///
/// Candidates are supplied to
/// [`Election::new`](crate::registry::Election::new) as an ordered roster.
/// Roster order is significant: it is the tie-break for the default result
/// ordering and for winner selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    /// Unique candidate identifier within the election
    ///
    /// Must be unique across the roster; construction rejects duplicates.
    pub id: String,

    /// Candidate's display name
    pub name: String,

    /// Party the candidate stands for
    pub party: String,
}

/// A registered voter
///
/// Created internally by
/// [`Election::register_voter`](crate::registry::Election::register_voter);
/// the `voted` flag is the only field that ever changes, flipped exactly
/// once when the voter's ballot is recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Voter {
    /// Unique voter identifier within the election
    pub id: String,

    /// Voter's display name
    pub name: String,

    /// Voter's age in years, already checked against the minimum voting age
    pub age: u64,

    /// Whether this voter has cast their ballot
    pub voted: bool,
}

/// One row of an election results snapshot
///
/// `votes` is the length of the candidate's vote ledger at the moment the
/// snapshot was taken. Rows are independent copies; they do not track
/// later ballots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateResult {
    /// Candidate identifier
    pub id: String,

    /// Candidate's display name
    pub name: String,

    /// Party the candidate stands for
    pub party: String,

    /// Number of ballots recorded for this candidate
    pub votes: usize,
}

/// Receipt passed to the success continuation of a recorded ballot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BallotReceipt {
    /// Candidate the ballot was recorded for
    pub candidate_id: String,
}

/// A node in a region tree for recursive vote aggregation
///
/// Region trees are stateless inputs to
/// [`count_votes_in_regions`](crate::tally::count_votes_in_regions): each
/// node carries its own vote count plus arbitrarily nested sub-regions.
/// The tree is assumed finite and acyclic.
///
/// # Examples
///
/// ```rust
/// use panchayat::types::Region;
///
/// let district: Region = serde_json::from_str(
///     r#"{ "name": "District", "votes": 5,
///          "sub_regions": [{ "name": "Village", "votes": 3 }] }"#,
/// ).unwrap();
///
/// assert_eq!(district.sub_regions.len(), 1);
/// assert!(district.sub_regions[0].sub_regions.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    /// Region name
    pub name: String,

    /// Votes recorded directly in this region
    pub votes: u64,

    /// Nested sub-regions, empty for leaf regions
    ///
    /// Absent in serialized form means empty.
    #[serde(default)]
    pub sub_regions: Vec<Region>,
}

impl Region {
    /// Create a leaf region with no sub-regions
    pub fn leaf(name: impl Into<String>, votes: u64) -> Self {
        Self {
            name: name.into(),
            votes,
            sub_regions: Vec::new(),
        }
    }

    /// Create a region with nested sub-regions
    pub fn branch(name: impl Into<String>, votes: u64, sub_regions: Vec<Region>) -> Self {
        Self {
            name: name.into(),
            votes,
            sub_regions,
        }
    }
}

/// Rules consumed by the voter validator factory
///
/// `required_fields` names the descriptor fields that must be present;
/// `min_age` is the eligibility threshold in years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum voting age in years
    pub min_age: u64,

    /// Descriptor fields that must be present
    pub required_fields: Vec<String>,
}

/// Verdict produced by a voter validator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Validation {
    /// Whether the descriptor passed every rule
    pub valid: bool,

    /// Short human-readable explanation of the verdict
    pub reason: String,
}

/// An immutable tally: candidate id to vote count
///
/// Operated on only by the pure helpers in [`crate::tally`], which return
/// fresh maps and never mutate their argument. `BTreeMap` keeps iteration
/// order deterministic for reporting and value-equality checks.
pub type Tally = BTreeMap<String, u64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_constructors() {
        let tree = Region::branch(
            "District",
            5,
            vec![Region::leaf("Village A", 3), Region::leaf("Village B", 2)],
        );

        assert_eq!(tree.votes, 5);
        assert_eq!(tree.sub_regions.len(), 2);
        assert!(tree.sub_regions[0].sub_regions.is_empty());
    }

    #[test]
    fn test_region_sub_regions_default() {
        // A serialized leaf may omit sub_regions entirely
        let region: Region =
            serde_json::from_str(r#"{ "name": "Ward 4", "votes": 7 }"#).unwrap();

        assert_eq!(region.name, "Ward 4");
        assert_eq!(region.votes, 7);
        assert!(region.sub_regions.is_empty());
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = Candidate {
            id: "C1".to_string(),
            name: "Sarpanch Ram".to_string(),
            party: "Janata".to_string(),
        };

        let json = serde_json::to_string(&candidate).unwrap();
        let back: Candidate = serde_json::from_str(&json).unwrap();
        assert_eq!(candidate, back);
    }
}
