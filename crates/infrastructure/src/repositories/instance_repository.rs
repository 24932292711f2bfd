use async_trait::async_trait;
use chrono::{DateTime, Utc};
use driftwood_application::ports::InstanceRepository;
use driftwood_domain::timestamp::{from_store, to_store};
use driftwood_domain::{DomainError, Identity, InstanceDomain};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type IdentityRow = (i64, String, String, Option<String>, i64, String);

pub struct SqliteInstanceRepository {
    pool: SqlitePool,
}

impl SqliteInstanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_identity(row: IdentityRow) -> Result<Identity, DomainError> {
        let (id, username, domain, name, local, created) = row;
        let created = from_store(&created).ok_or_else(|| {
            DomainError::IntegrityViolation(format!(
                "identity {} has unreadable created timestamp '{}'",
                id, created
            ))
        })?;
        Ok(Identity {
            id,
            username,
            domain,
            name,
            local: local != 0,
            created,
        })
    }

    async fn count(&self, sql: &str, what: &str) -> Result<u64, DomainError> {
        let (count,) = sqlx::query_as::<_, (i64,)>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, what, "Failed to count");
                DomainError::StoreUnavailable(e.to_string())
            })?;
        Ok(count as u64)
    }

    async fn count_between(
        &self,
        sql: &str,
        what: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let (count,) = sqlx::query_as::<_, (i64,)>(sql)
            .bind(to_store(&start))
            .bind(to_store(&end))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, what, "Failed to count range");
                DomainError::StoreUnavailable(e.to_string())
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl InstanceRepository for SqliteInstanceRepository {
    #[instrument(skip(self))]
    async fn count_local_identities(&self) -> Result<u64, DomainError> {
        self.count("SELECT COUNT(*) FROM identities WHERE local = 1", "identities")
            .await
    }

    #[instrument(skip(self))]
    async fn count_local_visible_posts(&self) -> Result<u64, DomainError> {
        self.count(
            "SELECT COUNT(*) FROM posts
             WHERE local = 1 AND state NOT IN ('deleted', 'deleted_fanned_out')",
            "posts",
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count_domains(&self) -> Result<u64, DomainError> {
        self.count("SELECT COUNT(*) FROM domains", "domains").await
    }

    #[instrument(skip(self))]
    async fn list_peer_domains(&self) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT domain FROM domains WHERE local = 0 AND blocked = 0 ORDER BY domain ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list peer domains");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(rows.into_iter().map(|(domain,)| domain).collect())
    }

    #[instrument(skip(self))]
    async fn count_local_posts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        self.count_between(
            "SELECT COUNT(*) FROM posts WHERE local = 1 AND created >= ? AND created < ?",
            "posts",
            start,
            end,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn count_local_identities_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        self.count_between(
            "SELECT COUNT(*) FROM identities WHERE local = 1 AND created >= ? AND created < ?",
            "identities",
            start,
            end,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_domain(&self, domain: &str) -> Result<Option<InstanceDomain>, DomainError> {
        let row = sqlx::query_as::<_, (String, i64, i64)>(
            "SELECT domain, local, blocked FROM domains WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(row.map(|(domain, local, blocked)| InstanceDomain {
            domain,
            local: local != 0,
            blocked: blocked != 0,
        }))
    }

    #[instrument(skip(self))]
    async fn first_admin_identity(&self) -> Result<Option<Identity>, DomainError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            "SELECT i.id, i.username, i.domain, i.name, i.local, i.created
             FROM identities i
             JOIN users u ON u.id = i.user_id
             WHERE u.admin = 1
             ORDER BY i.created ASC, i.id ASC
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query admin identity");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        row.map(Self::row_to_identity).transpose()
    }
}
