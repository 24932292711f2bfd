//! Driftwood Domain Layer
pub mod config;
pub mod errors;
pub mod identity;
pub mod instance;
pub mod language;
pub mod prune;
pub mod retention;
pub mod timestamp;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use identity::{AccountSummary, Identity};
pub use instance::{InstanceDomain, InstanceStats, WeeklyActivity};
pub use language::{Language, ISO_639_1_LANGUAGES};
pub use prune::{CandidateSet, PruneCandidate, PruneResult};
pub use retention::RetentionPolicy;
