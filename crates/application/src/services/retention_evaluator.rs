use driftwood_domain::{CandidateSet, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::PostRepository;

/// Narrows a candidate set down to the posts nothing replies to.
///
/// The check is a single hop: a candidate with any reply, local or remote,
/// candidate or not, stays for this pass. Reply chains therefore collapse
/// leaf-first across successive runs.
pub struct RetentionPolicyEvaluator {
    post_repo: Arc<dyn PostRepository>,
}

impl RetentionPolicyEvaluator {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }

    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn evaluate(&self, candidates: &CandidateSet) -> Result<CandidateSet, DomainError> {
        if candidates.is_empty() {
            return Ok(CandidateSet::new());
        }

        let uris = candidates.uris();
        let reply_parents = self.post_repo.replies_among(&uris).await?;
        let replies_seen = reply_parents.len();

        let mut safe = candidates.clone();
        let excluded = safe.exclude_replied(reply_parents);

        debug!(
            replies_seen,
            excluded,
            remaining = safe.len(),
            "Reply safety evaluated"
        );
        Ok(safe)
    }
}
