//! The election registry: one self-contained election session
//!
//! An [`Election`] owns a fixed candidate roster and a voter register as
//! private state. Every read accessor returns owned copies; the only
//! mutations are voter registration and ballot recording. The whole model
//! is single-threaded and synchronous: callers serialize access to an
//! instance, and two instances share nothing.

use crate::config::ElectionConfig;
use crate::types::{BallotReceipt, Candidate, CandidateResult, Voter};
use crate::{Result, registration_error};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// A candidate with its append-only vote ledger
///
/// The ledger records voter ids in ballot order; its length is the
/// candidate's vote count. Entries are never removed.
#[derive(Debug, Clone)]
struct CandidateEntry {
    candidate: Candidate,
    ledger: Vec<String>,
}

/// One election session with an isolated candidate roster and voter set
///
/// # Invariants
///
/// - Every ledger length is at most the number of voters with `voted = true`
/// - The sum of all ledger lengths is at most the number of registered
///   voters (each voter casts at most one ballot)
/// - Roster order is the input order and never changes; it is the tie-break
///   for default result ordering and winner selection
///
/// # Examples
///
/// ```rust
/// use panchayat::Election;
/// use panchayat::types::Candidate;
/// use serde_json::json;
///
/// let mut election = Election::new(
///     "Gram Panchayat 2025",
///     vec![
///         Candidate { id: "C1".into(), name: "Sarpanch Ram".into(), party: "Janata".into() },
///         Candidate { id: "C2".into(), name: "Pradhan Sita".into(), party: "Lok".into() },
///     ],
/// ).unwrap();
///
/// assert!(election.register_voter(&json!({ "id": "V1", "name": "Mohan", "age": 25 })));
///
/// let outcome = election.cast_vote(
///     "V1",
///     "C1",
///     |receipt| format!("voted for {}", receipt.candidate_id),
///     |reason| format!("error: {reason}"),
/// );
/// assert_eq!(outcome, "voted for C1");
/// ```
#[derive(Debug)]
pub struct Election {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    min_voting_age: u64,
    roster: Vec<CandidateEntry>,
    voters: HashMap<String, Voter>,
}

impl Election {
    /// Create an election with the default configuration
    ///
    /// The roster keeps its input order and each candidate starts with an
    /// empty vote ledger. Duplicate candidate ids are rejected; an empty
    /// roster is valid (results are empty and there is never a winner).
    pub fn new(title: impl Into<String>, candidates: Vec<Candidate>) -> Result<Self> {
        Self::with_config(title, candidates, &ElectionConfig::default())
    }

    /// Create an election with an explicit configuration
    pub fn with_config(
        title: impl Into<String>,
        candidates: Vec<Candidate>,
        config: &ElectionConfig,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(registration_error!(
                    "duplicate candidate id: {}",
                    candidate.id
                ));
            }
        }

        let title = title.into();
        let election = Self {
            id: Uuid::new_v4(),
            title,
            created_at: Utc::now(),
            min_voting_age: config.min_voting_age,
            roster: candidates
                .into_iter()
                .map(|candidate| CandidateEntry {
                    candidate,
                    ledger: Vec::new(),
                })
                .collect(),
            voters: HashMap::new(),
        };

        tracing::info!(
            election_id = %election.id,
            title = %election.title,
            candidates = election.roster.len(),
            "election created"
        );

        Ok(election)
    }

    /// Unique identifier of this election session
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Human-readable election title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// When this election session was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of candidates on the roster
    pub fn candidate_count(&self) -> usize {
        self.roster.len()
    }

    /// Number of registered voters
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Total ballots recorded across all candidates
    pub fn total_votes(&self) -> usize {
        self.roster.iter().map(|entry| entry.ledger.len()).sum()
    }

    /// Register a voter from a loosely-typed descriptor
    ///
    /// The descriptor must be a JSON object (not null, not an array) with a
    /// string `id` and an integer `age` at or above the minimum voting age,
    /// and the id must not already be registered. Any violation returns
    /// `false` and leaves the register unchanged; there is no error channel.
    ///
    /// A missing `name` is tolerated and stored as empty.
    pub fn register_voter(&mut self, descriptor: &Value) -> bool {
        let Some(fields) = descriptor.as_object() else {
            return false;
        };

        let Some(age) = fields.get("age").and_then(Value::as_u64) else {
            return false;
        };
        if age < self.min_voting_age {
            tracing::debug!(age, "voter below minimum voting age");
            return false;
        }

        let Some(id) = fields.get("id").and_then(Value::as_str) else {
            return false;
        };
        if self.voters.contains_key(id) {
            tracing::debug!(voter_id = id, "voter already registered");
            return false;
        }

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        self.voters.insert(
            id.to_string(),
            Voter {
                id: id.to_string(),
                name,
                age,
                voted: false,
            },
        );

        tracing::debug!(voter_id = id, "voter registered");
        true
    }

    /// Record a ballot, signaling the outcome through continuations
    ///
    /// Looks up voter and candidate by id. Failures invoke `on_error` with a
    /// short reason string (`"voter or candidate not registred"` for an
    /// unknown voter or candidate, `"already voted"` for a duplicate
    /// ballot); success appends the voter id to the candidate's ledger,
    /// marks the voter as having voted, and invokes `on_success` with a
    /// [`BallotReceipt`]. Either way the return value is exactly what the
    /// invoked continuation returned.
    ///
    /// A second ballot from the same voter is rejected, not ignored: one
    /// vote per voter is the enforced invariant.
    pub fn cast_vote<T>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: impl FnOnce(BallotReceipt) -> T,
        on_error: impl FnOnce(&str) -> T,
    ) -> T {
        let entry = self
            .roster
            .iter_mut()
            .find(|entry| entry.candidate.id == candidate_id);
        let voter = self.voters.get_mut(voter_id);

        let (Some(entry), Some(voter)) = (entry, voter) else {
            tracing::debug!(voter_id, candidate_id, "ballot rejected: unknown party");
            return on_error("voter or candidate not registred");
        };

        if voter.voted {
            tracing::debug!(voter_id, "ballot rejected: duplicate");
            return on_error("already voted");
        }

        entry.ledger.push(voter.id.clone());
        voter.voted = true;

        tracing::debug!(voter_id, candidate_id, "ballot recorded");
        on_success(BallotReceipt {
            candidate_id: candidate_id.to_string(),
        })
    }

    /// Results snapshot in the default order: votes descending, stable
    ///
    /// Ties keep their original roster order. The returned rows are
    /// independent copies of registry state.
    pub fn results(&self) -> Vec<CandidateResult> {
        self.results_by(|a, b| b.votes.cmp(&a.votes))
    }

    /// Results snapshot ordered by a caller-supplied comparator
    ///
    /// The comparator fully controls direction and tie-breaks; the
    /// underlying sort is stable, so comparator ties keep roster order.
    pub fn results_by<F>(&self, mut cmp: F) -> Vec<CandidateResult>
    where
        F: FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    {
        let mut snapshot: Vec<CandidateResult> = self
            .roster
            .iter()
            .map(|entry| CandidateResult {
                id: entry.candidate.id.clone(),
                name: entry.candidate.name.clone(),
                party: entry.candidate.party.clone(),
                votes: entry.ledger.len(),
            })
            .collect();

        snapshot.sort_by(|a, b| cmp(a, b));
        snapshot
    }

    /// The candidate with the most recorded ballots, if any were cast
    ///
    /// Ties go to the earliest candidate in roster order. Returns `None`
    /// when no ballots have been cast at all (including the empty roster).
    /// This is a pure read: roster order and ledgers are untouched.
    pub fn winner(&self) -> Option<Candidate> {
        let mut best: Option<&CandidateEntry> = None;
        for entry in &self.roster {
            match best {
                // Strictly greater keeps the first of any tied group
                Some(current) if entry.ledger.len() > current.ledger.len() => {
                    best = Some(entry);
                }
                None => best = Some(entry),
                _ => {}
            }
        }

        let best = best?;
        if best.ledger.is_empty() {
            return None;
        }

        Some(best.candidate.clone())
    }
}
