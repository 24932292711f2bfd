use crate::ports::InstanceRepository;
use driftwood_domain::{AccountSummary, DomainError, InstanceDomain};
use std::sync::Arc;
use tracing::debug;

/// Everything the v2 instance document needs from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescription {
    pub domain: InstanceDomain,
    pub active_month: u64,
    pub contact: Option<AccountSummary>,
}

pub struct DescribeInstanceUseCase {
    repository: Arc<dyn InstanceRepository>,
    main_domain: String,
}

impl DescribeInstanceUseCase {
    pub fn new(repository: Arc<dyn InstanceRepository>, main_domain: impl Into<String>) -> Self {
        Self {
            repository,
            main_domain: main_domain.into(),
        }
    }

    pub async fn execute(&self, host: Option<&str>) -> Result<InstanceDescription, DomainError> {
        let domain = self.resolve_domain(host).await?;

        let (active_month, admin) = tokio::join!(
            self.repository.count_local_identities(),
            self.repository.first_admin_identity()
        );

        Ok(InstanceDescription {
            domain,
            active_month: active_month?,
            contact: admin?.as_ref().map(AccountSummary::from),
        })
    }

    /// The requested host if it is one of ours, otherwise the main domain.
    async fn resolve_domain(&self, host: Option<&str>) -> Result<InstanceDomain, DomainError> {
        if let Some(host) = host.map(normalize_host).filter(|h| !h.is_empty()) {
            if let Some(domain) = self.repository.find_domain(&host).await? {
                if domain.local {
                    return Ok(domain);
                }
                debug!(host = %host, "Requested host is not a local domain");
            }
        }

        self.repository
            .find_domain(&self.main_domain)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("No domain set up for {}", self.main_domain))
            })
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let without_port = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    };
    without_port.to_ascii_lowercase()
}
