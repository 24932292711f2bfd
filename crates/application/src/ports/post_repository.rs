use async_trait::async_trait;
use chrono::{DateTime, Utc};
use driftwood_domain::{DomainError, PruneCandidate};

/// Selection criteria for one pruning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneCandidateQuery {
    pub created_before: DateTime<Utc>,
    pub limit: u32,
}

/// Content store operations the retention subsystem relies on.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Remote posts with an `object_uri`, created strictly before
    /// `created_before`, that no local identity has interacted with.
    /// Oldest first, at most `limit` rows. Stored `created` values must use
    /// `timestamp::STORE_FORMAT`; the comparison is textual.
    async fn find_prune_candidates(
        &self,
        query: PruneCandidateQuery,
    ) -> Result<Vec<PruneCandidate>, DomainError>;

    /// `in_reply_to` of every stored post, local or remote, whose parent is
    /// one of `object_uris`.
    async fn replies_among(&self, object_uris: &[String])
        -> Result<Vec<Option<String>>, DomainError>;

    /// Deletes the given posts atomically. Returns the number of rows the
    /// store actually removed.
    async fn delete_by_ids(&self, post_ids: &[i64]) -> Result<u64, DomainError>;
}
