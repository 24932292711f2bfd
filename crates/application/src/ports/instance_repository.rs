use async_trait::async_trait;
use chrono::{DateTime, Utc};
use driftwood_domain::{DomainError, Identity, InstanceDomain};

#[async_trait]
pub trait InstanceRepository: Send + Sync {
    async fn count_local_identities(&self) -> Result<u64, DomainError>;

    /// Local posts that have not been deleted.
    async fn count_local_visible_posts(&self) -> Result<u64, DomainError>;

    async fn count_domains(&self) -> Result<u64, DomainError>;

    /// Names of known remote domains that are not blocked.
    async fn list_peer_domains(&self) -> Result<Vec<String>, DomainError>;

    /// Local posts created in `[start, end)`.
    async fn count_local_posts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError>;

    /// Local identities created in `[start, end)`.
    async fn count_local_identities_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError>;

    async fn find_domain(&self, domain: &str) -> Result<Option<InstanceDomain>, DomainError>;

    /// Oldest identity owned by an admin user.
    async fn first_admin_identity(&self) -> Result<Option<Identity>, DomainError>;
}
