#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use driftwood_application::ports::{PostRepository, PruneCandidateQuery};
use driftwood_domain::{DomainError, PruneCandidate};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredPost {
    id: i64,
    object_uri: String,
    local: bool,
    created: DateTime<Utc>,
    in_reply_to: Option<String>,
}

pub struct MockPostRepository {
    posts: Arc<RwLock<Vec<StoredPost>>>,
    find_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            find_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_remote_post(&self, id: i64, age_days: i64) {
        self.posts.write().await.push(StoredPost {
            id,
            object_uri: format!("https://remote.example/notes/{}", id),
            local: false,
            created: Utc::now() - Duration::days(age_days),
            in_reply_to: None,
        });
    }

    pub async fn add_local_reply(&self, id: i64, parent_id: i64) {
        self.posts.write().await.push(StoredPost {
            id,
            object_uri: format!("https://social.example/posts/{}", id),
            local: true,
            created: Utc::now(),
            in_reply_to: Some(format!("https://remote.example/notes/{}", parent_id)),
        });
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn count(&self) -> usize {
        self.posts.read().await.len()
    }

    pub fn find_calls(&self) -> u64 {
        self.find_calls.load(Ordering::Relaxed)
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::StoreUnavailable("mock store down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn find_prune_candidates(
        &self,
        query: PruneCandidateQuery,
    ) -> Result<Vec<PruneCandidate>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::Relaxed);
        self.check_failure().await?;

        let mut eligible: Vec<StoredPost> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|p| !p.local && p.created < query.created_before)
            .cloned()
            .collect();
        eligible.sort_by_key(|p| (p.created, p.id));

        Ok(eligible
            .into_iter()
            .take(query.limit as usize)
            .map(|p| PruneCandidate::new(p.object_uri, p.id))
            .collect())
    }

    async fn replies_among(
        &self,
        object_uris: &[String],
    ) -> Result<Vec<Option<String>>, DomainError> {
        self.check_failure().await?;
        let wanted: HashSet<&str> = object_uris.iter().map(String::as_str).collect();
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|p| p.in_reply_to.as_deref().is_some_and(|u| wanted.contains(u)))
            .map(|p| p.in_reply_to.clone())
            .collect())
    }

    async fn delete_by_ids(&self, post_ids: &[i64]) -> Result<u64, DomainError> {
        self.check_failure().await?;
        let doomed: HashSet<i64> = post_ids.iter().copied().collect();
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| !doomed.contains(&p.id));
        Ok((before - posts.len()) as u64)
    }
}
