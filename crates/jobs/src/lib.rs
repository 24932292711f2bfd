pub mod prune_posts;
pub mod runner;

pub use prune_posts::PrunePostsJob;
pub use runner::JobRunner;
