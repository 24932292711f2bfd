mod instance_repository;
mod post_repository;
mod prune_progress;

pub use instance_repository::InstanceRepository;
pub use post_repository::{PostRepository, PruneCandidateQuery};
pub use prune_progress::{PruneProgress, SilentProgress};
