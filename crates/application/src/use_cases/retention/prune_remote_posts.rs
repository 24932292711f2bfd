use crate::ports::{PostRepository, PruneCandidateQuery, PruneProgress};
use crate::services::RetentionPolicyEvaluator;
use chrono::{DateTime, Utc};
use driftwood_domain::{CandidateSet, DomainError, PruneResult, RetentionPolicy};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Use case: one bounded pass deleting cached remote posts that nobody here
/// depends on.
///
/// Selection, reply exclusion and deletion run strictly in sequence, and the
/// delete is the only write, so any failure before it leaves the store as it
/// was.
pub struct PruneRemotePostsUseCase {
    post_repo: Arc<dyn PostRepository>,
    evaluator: RetentionPolicyEvaluator,
}

impl PruneRemotePostsUseCase {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self {
            evaluator: RetentionPolicyEvaluator::new(post_repo.clone()),
            post_repo,
        }
    }

    pub async fn execute(
        &self,
        limit: u32,
        policy: &RetentionPolicy,
        progress: &dyn PruneProgress,
    ) -> Result<PruneResult, DomainError> {
        self.execute_at(limit, policy, Utc::now(), progress).await
    }

    #[instrument(skip(self, progress), fields(horizon_days = policy.horizon_days()))]
    pub async fn execute_at(
        &self,
        limit: u32,
        policy: &RetentionPolicy,
        now: DateTime<Utc>,
        progress: &dyn PruneProgress,
    ) -> Result<PruneResult, DomainError> {
        if limit == 0 {
            return Err(DomainError::InvalidBatchSize(limit));
        }

        progress.selecting(limit);
        let query = PruneCandidateQuery {
            created_before: policy.cutoff(now),
            limit,
        };
        let rows = self.post_repo.find_prune_candidates(query).await?;
        if rows.len() > limit as usize {
            return Err(DomainError::IntegrityViolation(format!(
                "store returned {} candidates for a limit of {}",
                rows.len(),
                limit
            )));
        }

        let candidates = CandidateSet::from_candidates(rows)?;
        progress.candidates_found(candidates.len());
        debug!(considered = candidates.len(), "Prune candidates selected");

        progress.excluding_replies();
        let safe = self.evaluator.evaluate(&candidates).await?;
        progress.eligible(safe.len());

        let post_ids = safe.post_ids();
        let deleted = if post_ids.is_empty() {
            0
        } else {
            self.post_repo.delete_by_ids(&post_ids).await?
        };
        if deleted > post_ids.len() as u64 {
            return Err(DomainError::IntegrityViolation(format!(
                "store deleted {} rows for {} requested ids",
                deleted,
                post_ids.len()
            )));
        }
        progress.deleted(deleted);

        let result = PruneResult {
            considered: candidates.len(),
            eligible: safe.len(),
            deleted,
        };
        info!(
            considered = result.considered,
            retained_for_replies = result.retained_for_replies(),
            deleted = result.deleted,
            "Remote post prune pass finished"
        );
        Ok(result)
    }
}
