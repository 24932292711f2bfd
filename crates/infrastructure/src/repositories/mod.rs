pub mod instance_repository;
pub mod post_repository;

pub use instance_repository::SqliteInstanceRepository;
pub use post_repository::SqlitePostRepository;
