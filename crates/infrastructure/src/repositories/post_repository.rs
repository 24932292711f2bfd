use async_trait::async_trait;
use driftwood_application::ports::{PostRepository, PruneCandidateQuery};
use driftwood_domain::timestamp::to_store;
use driftwood_domain::{DomainError, PruneCandidate};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

/// SQLite caps bound parameters per statement at 999.
const MAX_BINDS: usize = 999;

fn build_in_list_sql(prefix: &str, n: usize) -> String {
    debug_assert!(n > 0 && n <= MAX_BINDS);
    let mut sql = String::with_capacity(prefix.len() + n * 2 + 1);
    sql.push_str(prefix);
    sql.push('(');
    for i in 0..n {
        if i > 0 {
            sql.push(',');
        }
        sql.push('?');
    }
    sql.push(')');
    sql
}

pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    #[instrument(skip(self))]
    async fn find_prune_candidates(
        &self,
        query: PruneCandidateQuery,
    ) -> Result<Vec<PruneCandidate>, DomainError> {
        let cutoff = to_store(&query.created_before);

        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT p.object_uri, p.id FROM posts p
             WHERE p.local = 0
               AND p.object_uri IS NOT NULL
               AND p.created < ?
               AND NOT EXISTS (
                   SELECT 1 FROM post_interactions pi
                   JOIN identities i ON i.id = pi.identity_id
                   WHERE pi.post_id = p.id AND i.local = 1
               )
             ORDER BY p.created ASC, p.id ASC
             LIMIT ?",
        )
        .bind(&cutoff)
        .bind(i64::from(query.limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query prune candidates");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        debug!(found = rows.len(), cutoff = %cutoff, "Prune candidates selected");

        Ok(rows
            .into_iter()
            .map(|(object_uri, id)| PruneCandidate::new(object_uri, id))
            .collect())
    }

    #[instrument(skip(self, object_uris), fields(uris = object_uris.len()))]
    async fn replies_among(
        &self,
        object_uris: &[String],
    ) -> Result<Vec<Option<String>>, DomainError> {
        let mut parents = Vec::new();

        for chunk in object_uris.chunks(MAX_BINDS) {
            let sql = build_in_list_sql("SELECT in_reply_to FROM posts WHERE in_reply_to IN ", chunk.len());
            let mut q = sqlx::query_as::<_, (Option<String>,)>(&sql);
            for object_uri in chunk {
                q = q.bind(object_uri.as_str());
            }

            let rows = q.fetch_all(&self.pool).await.map_err(|e| {
                error!(error = %e, chunk_size = chunk.len(), "Failed to query replies");
                DomainError::StoreUnavailable(e.to_string())
            })?;
            parents.extend(rows.into_iter().map(|(in_reply_to,)| in_reply_to));
        }

        Ok(parents)
    }

    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn delete_by_ids(&self, post_ids: &[i64]) -> Result<u64, DomainError> {
        if post_ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction for post deletion");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        let mut deleted = 0u64;
        for chunk in post_ids.chunks(MAX_BINDS) {
            let sql = build_in_list_sql("DELETE FROM posts WHERE id IN ", chunk.len());
            let mut q = sqlx::query(&sql);
            for id in chunk {
                q = q.bind(*id);
            }

            let result = q.execute(&mut *tx).await.map_err(|e| {
                error!(error = %e, chunk_size = chunk.len(), "Failed to delete posts");
                DomainError::StoreUnavailable(e.to_string())
            })?;
            deleted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit post deletion");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(deleted)
    }
}
