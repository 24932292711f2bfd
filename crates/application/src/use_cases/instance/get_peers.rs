use crate::ports::InstanceRepository;
use driftwood_domain::DomainError;
use std::sync::Arc;

pub struct GetPeersUseCase {
    repository: Arc<dyn InstanceRepository>,
}

impl GetPeersUseCase {
    pub fn new(repository: Arc<dyn InstanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        self.repository.list_peer_domains().await
    }
}
