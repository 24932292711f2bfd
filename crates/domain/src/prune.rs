use crate::errors::DomainError;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A remote post provisionally selected for deletion, before reply safety
/// has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneCandidate {
    pub object_uri: String,
    pub post_id: i64,
}

impl PruneCandidate {
    pub fn new(object_uri: impl Into<String>, post_id: i64) -> Self {
        Self {
            object_uri: object_uri.into(),
            post_id,
        }
    }
}

/// Per-run mapping of `object_uri -> post id`.
///
/// Ordered by URI so that every derived list (query binds, delete ids) is
/// deterministic for a given store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    by_uri: BTreeMap<String, i64>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping, refusing to silently collapse two posts that claim
    /// the same `object_uri`.
    pub fn from_candidates<I>(candidates: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = PruneCandidate>,
    {
        let mut by_uri = BTreeMap::new();
        for candidate in candidates {
            match by_uri.entry(candidate.object_uri) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate.post_id);
                }
                Entry::Occupied(existing) => {
                    return Err(DomainError::IntegrityViolation(format!(
                        "object_uri {} returned for posts {} and {}",
                        existing.key(),
                        existing.get(),
                        candidate.post_id
                    )));
                }
            }
        }
        Ok(Self { by_uri })
    }

    pub fn len(&self) -> usize {
        self.by_uri.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_uri.is_empty()
    }

    pub fn uris(&self) -> Vec<String> {
        self.by_uri.keys().cloned().collect()
    }

    pub fn post_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.by_uri.values().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Drops every candidate named as the parent of some reply. Null parents
    /// and parents outside the set are ignored; a parent named more than once
    /// is removed once. Returns how many candidates were dropped.
    pub fn exclude_replied<I, S>(&mut self, reply_parents: I) -> usize
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let before = self.by_uri.len();
        for parent in reply_parents.into_iter().flatten() {
            self.by_uri.remove(parent.as_ref());
        }
        before - self.by_uri.len()
    }

    pub fn is_subset_of(&self, other: &CandidateSet) -> bool {
        self.by_uri
            .iter()
            .all(|(uri, id)| other.by_uri.get(uri) == Some(id))
    }
}

/// Outcome of one pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneResult {
    /// Candidates selected before reply exclusion.
    pub considered: usize,
    /// Candidates left after reply exclusion.
    pub eligible: usize,
    /// Rows the store reported as removed.
    pub deleted: u64,
}

impl PruneResult {
    /// A pass that removed nothing. Not an error: the scheduler reads it as
    /// "nothing to do right now".
    pub fn is_idle(&self) -> bool {
        self.deleted == 0
    }

    pub fn retained_for_replies(&self) -> usize {
        self.considered.saturating_sub(self.eligible)
    }
}
