use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Content store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Invalid prune batch size: {0} (must be at least 1)")]
    InvalidBatchSize(u32),

    #[error("Resource not found: {0}")]
    NotFound(String),
}
